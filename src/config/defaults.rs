/// Starter templates as `(title, content, link)`.
pub const DEFAULT_TEMPLATES: &[(&str, &str, Option<&str>)] = &[
    (
        "General assistant",
        "You are a helpful AI assistant. Please answer my question: {{question}}",
        Some("https://www.google.com"),
    ),
    (
        "Code assistant",
        "You are a programming expert. Please help me with the following problem.\n\nLanguage: {{language}}\n\nProblem: {{problem}}",
        None,
    ),
    (
        "Translator",
        "Translate the following {{sourceLanguage}} text into {{targetLanguage}}:\n\n{{text}}",
        None,
    ),
];
