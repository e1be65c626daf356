pub fn greet(name: &str, age: Option<u32>) -> String {
    match age {
        Some(age) => format!("Hello, {}! You are {} years old.", name, age),
        None => format!("Hello, {}!", name),
    }
}
