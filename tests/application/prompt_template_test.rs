use docqa::application::services::{DEFAULT_PROMPT_TEMPLATE, PromptTemplate, PromptTemplateError};

#[test]
fn given_default_template_when_rendering_then_fills_context_and_question() {
    let template = PromptTemplate::default();

    let prompt = template.render("Paris is the capital of France.", "What is the capital?");

    assert!(prompt.contains("Context: Paris is the capital of France."));
    assert!(prompt.contains("Question: What is the capital?"));
    assert!(!prompt.contains("{context}"));
    assert!(!prompt.contains("{question}"));
}

#[test]
fn given_template_without_question_when_creating_then_returns_missing_placeholder() {
    let result = PromptTemplate::new("Context: {context}");

    assert_eq!(
        result.unwrap_err(),
        PromptTemplateError::MissingPlaceholder("{question}")
    );
}

#[test]
fn given_context_containing_placeholder_when_rendering_then_it_is_not_substituted() {
    let template = PromptTemplate::new("{context} | {question}").unwrap();

    let prompt = template.render("literal {question} text", "real question");

    assert_eq!(prompt, "literal {question} text | real question");
}

#[test]
fn given_template_with_other_braces_when_rendering_then_keeps_them() {
    let template = PromptTemplate::new("{json} {context} {question}").unwrap();

    assert_eq!(template.render("c", "q"), "{json} c q");
}

#[test]
fn given_default_constant_when_parsed_then_is_valid() {
    let template = PromptTemplate::new(DEFAULT_PROMPT_TEMPLATE).unwrap();
    assert_eq!(template.as_str(), DEFAULT_PROMPT_TEMPLATE);
}
