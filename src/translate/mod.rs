//! Translation - the form request, language handling and the translator

mod language;
mod translator;

pub use language::{Language, LanguagePolicy};
pub use translator::{
    TRANSLATION_SYSTEM_PROMPT, TRANSLATION_USER_PROMPT, TranslationRequest, Translator,
    preview, translation_template,
};
