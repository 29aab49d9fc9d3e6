use stream_pulse::{json_to_text, json_to_yaml, DataProcessor, WordFrequencyCounter};

fn main() {
    let json = br#"{
        "user": {
            "name": "John Doe",
            "email": "john.doe@example.com",
            "roles": ["admin", "dev"]
        }
    }"#;

    match json_to_text(json) {
        Ok(text) => println!("Flattened JSON:\n{text}"),
        Err(e) => eprintln!("Failed to flatten JSON: {e:?}"),
    }

    match json_to_yaml(json) {
        Ok(yaml) => println!("As YAML:\n{yaml}"),
        Err(e) => eprintln!("Failed to convert JSON: {e:?}"),
    }

    let counter = WordFrequencyCounter::new();
    for chunk in ["hello world", "hello", "world world"] {
        counter.process(chunk);
    }
    println!("Top words: {:?}", counter.top(2));
}
