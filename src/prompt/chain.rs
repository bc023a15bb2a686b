//! Prompt chain - template, model call and parser as one invocable unit
//!
//! `invoke` renders the template, issues exactly one model call and parses
//! the response. Nothing is retried and nothing is mutated between calls.

use log::{debug, info};

use crate::error::Result;
use crate::llm::client::ChatModel;
use crate::llm::types::{CompletionRequest, FinishReason, Message};
use crate::prompt::parser::{OutputParser, StrOutputParser};
use crate::prompt::template::{MessageTemplate, Variables};

/// Composition of a message template, a chat model and an output parser
#[derive(Debug)]
pub struct PromptChain<M, P = StrOutputParser> {
    template: MessageTemplate,
    model: M,
    parser: P,
}

impl<M: ChatModel> PromptChain<M> {
    /// Chain returning the model text verbatim
    pub fn new(template: MessageTemplate, model: M) -> Self {
        Self {
            template,
            model,
            parser: StrOutputParser,
        }
    }
}

impl<M: ChatModel, P: OutputParser> PromptChain<M, P> {
    /// Replace the output parser
    pub fn with_parser<Q: OutputParser>(self, parser: Q) -> PromptChain<M, Q> {
        PromptChain {
            template: self.template,
            model: self.model,
            parser,
        }
    }

    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render the messages without calling the model
    pub fn render(&self, vars: &Variables) -> Result<Vec<Message>> {
        let messages = self.template.render(vars)?;
        debug!("Rendered {} messages", messages.len());
        Ok(messages)
    }

    /// Render, call the model once, and parse the response
    pub fn invoke(&self, vars: &Variables) -> Result<String> {
        let messages = self.render(vars)?;
        let request = CompletionRequest::new(messages);

        info!(
            "Invoking model {} with {} messages",
            self.model.model(),
            request.messages.len()
        );
        let response = self.model.complete(&request)?;

        debug!(
            "Model responded: finish_reason={:?} input_tokens={} output_tokens={}",
            response.finish_reason, response.usage.input_tokens, response.usage.output_tokens
        );
        if response.finish_reason.as_ref().is_some_and(FinishReason::is_truncated) {
            log::warn!("Model output was truncated by the token limit");
        }

        self.parser.parse(&response)
    }
}
