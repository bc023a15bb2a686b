//! Translator - the translation prompt chain behind the form

use log::{debug, info};

use crate::config::GlobalConfig;
use crate::error::{Result, TranslatrError};
use crate::llm::client::ChatModel;
use crate::llm::groq::GroqClient;
use crate::llm::types::{Message, Role};
use crate::prompt::{MessageTemplate, PromptChain, variables};
use crate::translate::language::LanguagePolicy;

/// System prompt of the translation template
pub const TRANSLATION_SYSTEM_PROMPT: &str = "Translate the following message into {{ language }}:";

/// User prompt of the translation template
pub const TRANSLATION_USER_PROMPT: &str = "{{ text }}";

/// Build the fixed translation template
pub fn translation_template() -> Result<MessageTemplate> {
    MessageTemplate::from_messages([
        (Role::System, TRANSLATION_SYSTEM_PROMPT),
        (Role::User, TRANSLATION_USER_PROMPT),
    ])
}

/// Render the messages a request would send, without any model
pub fn preview(request: &TranslationRequest, policy: LanguagePolicy) -> Result<Vec<Message>> {
    let language = request.validate(policy)?;
    translation_template()?.render(&variables([("language", language), ("text", request.text.clone())]))
}

/// One submitted form: the text and where it should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub language: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }

    /// Check the input before anything reaches the model
    ///
    /// Returns the language value to substitute into the prompt.
    pub fn validate(&self, policy: LanguagePolicy) -> Result<String> {
        if self.text.trim().is_empty() {
            return Err(TranslatrError::EmptyInput);
        }
        policy.check(&self.language)
    }
}

/// Translates text through a prompt chain
#[derive(Debug)]
pub struct Translator<M> {
    chain: PromptChain<M>,
    policy: LanguagePolicy,
}

impl Translator<GroqClient> {
    /// Groq-backed translator built from configuration
    ///
    /// Fails with a configuration error when the API key is missing.
    pub fn from_config(config: &GlobalConfig) -> Result<Self> {
        let client = GroqClient::new(&config.llm)?;
        info!("Using model {} via {}", config.llm.model, client.endpoint());
        Self::new(client, LanguagePolicy::from_strict(config.translation.strict_languages))
    }
}

impl<M: ChatModel> Translator<M> {
    pub fn new(model: M, policy: LanguagePolicy) -> Result<Self> {
        Ok(Self {
            chain: PromptChain::new(translation_template()?, model),
            policy,
        })
    }

    pub fn policy(&self) -> LanguagePolicy {
        self.policy
    }

    pub fn model(&self) -> &M {
        self.chain.model()
    }

    /// Validate the request and run it through the chain
    ///
    /// The text is sent unchanged and the model output is returned verbatim.
    pub fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let language = request.validate(self.policy)?;
        debug!("Translating {} chars into {}", request.text.chars().count(), language);
        self.chain
            .invoke(&variables([("language", language), ("text", request.text.clone())]))
    }

    /// The messages a request would send, without calling the model
    pub fn preview(&self, request: &TranslationRequest) -> Result<Vec<Message>> {
        let language = request.validate(self.policy)?;
        self.chain
            .render(&variables([("language", language), ("text", request.text.clone())]))
    }
}
