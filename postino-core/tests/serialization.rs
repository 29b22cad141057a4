use postino_core::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

fn sample_message() -> Message {
    Message {
        id: 7,
        sender: "leifgw".to_string(),
        recipient: "kungen".to_string(),
        content: "Tjenare kungen!".to_string(),
        timestamp: "2025-11-02T10:20:30Z".to_string(),
    }
}

/*
    Obiettivo test: verificare la forma wire del messaggio: tutti i campi
    presenti con i nomi attesi, e nessuna traccia del flag di lettura (che è
    stato interno dello store e non deve mai uscire sul wire).
    Verificare anche che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust.
*/
#[test]
fn message_wire_shape_roundtrip() {
    let m = sample_message();
    let s = json::to_string(&m).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["id"], 7);
    assert_eq!(v["sender"], m.sender);
    assert_eq!(v["recipient"], m.recipient);
    assert_eq!(v["content"], m.content);
    assert_eq!(v["timestamp"], m.timestamp);
    assert!(v.get("isRead").is_none(), "is_read must never reach the wire");
    assert!(v.get("is_read").is_none());

    let back: Message = json::from_str(&s).expect("deserialize");
    assert_eq!(back, m);
}

/*
    Obiettivo test: un body di send con un campo assente deve deserializzare
    comunque (campo a None): è la validazione dello store a respingerlo con
    400, non il parser JSON.
*/
#[test]
fn send_request_tolerates_missing_fields() {
    let req: SendMessageRequest =
        json::from_str(r#"{"sender": "leifgw", "content": "Tjenare kungen!"}"#).expect("deserialize");

    assert_eq!(req.sender.as_deref(), Some("leifgw"));
    assert!(req.recipient.is_none());
    assert_eq!(req.content.as_deref(), Some("Tjenare kungen!"));
}

/*
    Obiettivo test: verificare che la risposta della coda dei non letti ometta
    il marker informativo quando ci sono messaggi, e lo includa quando la coda
    è vuota.
*/
#[test]
fn new_messages_response_info_marker() {
    let with_messages = NewMessagesResponse {
        messages: vec![sample_message()],
        info: None,
    };
    let v = parse(&json::to_string(&with_messages).expect("serialize"));
    assert!(v["info"].is_null(), "info should be omitted when there are messages");
    assert_eq!(v["messages"][0]["sender"], "leifgw");

    let empty = NewMessagesResponse {
        messages: vec![],
        info: Some("No new messages found for kungen".to_string()),
    };
    let v = parse(&json::to_string(&empty).expect("serialize"));
    assert_eq!(v["info"], "No new messages found for kungen");
    assert!(v["messages"].as_array().expect("array").is_empty());
}

/*
    Obiettivo test:
    verificare che ListMessagesResponse serializzi i metadati di paginazione
    con i nomi campo giusti (camelCase)
    verificare che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust
*/
#[test]
fn list_messages_response_roundtrip() {
    let resp = ListMessagesResponse {
        messages: vec![sample_message()],
        total_messages: 1,
        start_index: 0,
        stop_index: 50,
    };
    let s = json::to_string(&resp).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["totalMessages"], 1);
    assert_eq!(v["startIndex"], 0);
    assert_eq!(v["stopIndex"], 50);
    assert_eq!(v["messages"][0]["id"], 7);

    let back: ListMessagesResponse = json::from_str(&s).expect("deserialize");
    assert_eq!(back, resp);
}

/*
    Obiettivo test:
    verificare che DeleteMessageResponse esponga il record cancellato sotto
    la chiave deletedMessage (camelCase)
    verificare che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust
*/
#[test]
fn delete_message_response_roundtrip() {
    let resp = DeleteMessageResponse {
        deleted_message: sample_message(),
        info: "Message deleted successfully".to_string(),
    };
    let s = json::to_string(&resp).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["deletedMessage"]["id"], 7);
    assert_eq!(v["info"], "Message deleted successfully");

    let back: DeleteMessageResponse = json::from_str(&s).expect("deserialize");
    assert_eq!(back, resp);
}

/*
    Obiettivo test: i tre modi in cui un client può non mandare gli id di una
    delete in blocco ("ids": null, campo assente, lista vuota) devono tutti
    deserializzare in una richiesta che la validazione respingerà.
*/
#[test]
fn delete_messages_request_tolerates_null_and_missing_ids() {
    let req: DeleteMessagesRequest = json::from_str(r#"{"ids": null}"#).expect("deserialize");
    assert!(req.ids.is_none());

    let req: DeleteMessagesRequest = json::from_str(r#"{}"#).expect("deserialize");
    assert!(req.ids.is_none());

    let req: DeleteMessagesRequest = json::from_str(r#"{"ids": []}"#).expect("deserialize");
    assert_eq!(req.ids, Some(vec![]));

    let req: DeleteMessagesRequest = json::from_str(r#"{"ids": [1, 2, 3]}"#).expect("deserialize");
    assert_eq!(req.ids, Some(vec![1, 2, 3]));
}

/*
    Obiettivo test:
    verificare che Error venga serializzato nel JSON con i nomi campo giusti
    e che details venga omesso quando assente
    verificare che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust
*/
#[test]
fn error_envelope_roundtrip() {
    let err = Error::new("not_found", "Messages not found")
        .with_details(json::json!({"notFoundIds": [3]}));

    let s = json::to_string(&err).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["code"], "not_found");
    assert_eq!(v["message"], "Messages not found");
    assert_eq!(v["details"]["notFoundIds"][0], 3);

    let back: Error = json::from_str(&s).expect("deserialize");
    assert_eq!(back, err);

    // senza details la chiave sparisce dal JSON
    let bare = Error::new("validation_error", "Missing required fields");
    let v = parse(&json::to_string(&bare).expect("serialize"));
    assert!(v.get("details").is_none());
}
