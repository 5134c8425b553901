// for serde
pub fn is_empty<T>(value: &[T]) -> bool {
    value.is_empty()
}

pub fn default_main() -> String {
    String::from("main")
}
