const LANGUAGES: &[&str] = &[
    "python",
    "javascript",
    "react",
    "go",
    "rust",
    "java",
    "c++",
    "typescript",
];
const DEFAULT_LANGUAGE: &str = "Python";
const TRIGGER_WORDS: &[&str] = &["generate", "create"];

const CAPABILITIES_RESPONSE: &str = "I can generate code in Python, JavaScript, React, Go, Rust, and more. Try: 'generate a Python REST API'";

pub fn respond(message: &str) -> String {
    let lowered = message.to_lowercase();
    if !TRIGGER_WORDS.iter().any(|word| lowered.contains(word)) {
        return CAPABILITIES_RESPONSE.to_string();
    }

    let language = extract_language(&lowered);
    let description = extract_description(message);

    format!(
        r#"⚡ **Generating {language} Code**

Based on your request: "{description}"

```python
def example_function():
    """Example {language} function for {description}"""
    # Implementation would go here
    return "Generated code with safety gates and best practices"
```

**Generated with:**
- ✅ Safety gates applied
- ✅ Best practices implemented
- ✅ Error handling included
- ✅ Documentation added

Would you like me to modify this or generate something else?"#
    )
}

/// First known language mentioned in the (lower-cased) message, title-cased.
pub fn extract_language(lowered: &str) -> String {
    LANGUAGES
        .iter()
        .find(|language| lowered.contains(*language))
        .map(|language| title_case(language))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Removes the trigger words as typed (case-sensitive) and trims the rest.
pub fn extract_description(message: &str) -> String {
    TRIGGER_WORDS
        .iter()
        .fold(message.to_string(), |text, word| text.replace(word, ""))
        .trim()
        .to_string()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
