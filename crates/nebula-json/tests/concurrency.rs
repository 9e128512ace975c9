//! Containers shared across threads

use std::thread;

use nebula_json::{JsonArray, JsonObject, JsonValue, decode_value, encode};

#[test]
fn concurrent_puts_on_shared_object() {
    let obj = JsonObject::new();

    thread::scope(|s| {
        for t in 0..8u32 {
            let obj = obj.clone();
            s.spawn(move || {
                for i in 0..100u32 {
                    obj.put(format!("{t}-{i}"), i).unwrap();
                }
            });
        }
    });

    assert_eq!(obj.len(), 800);
    assert_eq!(obj.get("7-99").and_then(|v| v.as_i64()), Some(99));
}

#[test]
fn readers_and_writers_interleave() {
    let log = JsonArray::new();
    let root = JsonObject::new();
    root.put("log", log.clone()).unwrap();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..200i32 {
                log.add(i).unwrap();
            }
        });
        s.spawn(|| {
            for _ in 0..50 {
                let text = encode(&root).unwrap();
                let snapshot: JsonObject = decode_value(&text).unwrap();
                assert!(snapshot.get("log").is_some_and(|v| v.is_array()));
            }
        });
        s.spawn(|| {
            for _ in 0..50 {
                let copy = root.copy();
                assert!(copy.get("log").is_some_and(|v| v.is_array()));
            }
        });
    });

    assert_eq!(log.len(), 200);
    assert_eq!(log.get(199), Some(JsonValue::from(199i32)));
}

#[test]
fn copying_an_object_into_itself_does_not_deadlock() {
    let obj = JsonObject::new();
    obj.put("a", 1i32).unwrap();
    obj.put_copy("self", obj.clone()).unwrap();

    assert_eq!(obj.to_string(), r#"{"a":1,"self":{"a":1}}"#);
}
