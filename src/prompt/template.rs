//! Message templates with `{{ name }}` placeholders
//!
//! A template is an ordered list of role-tagged patterns compiled once into a
//! minijinja environment. Only interpolation is allowed; block and comment
//! tags are rejected at construction.

use std::collections::{BTreeSet, HashMap};

use minijinja::{Environment, UndefinedBehavior};

use crate::error::{Result, TranslatrError};
use crate::llm::types::{Message, Role};

/// Placeholder name to substitution value
pub type Variables = HashMap<String, String>;

/// Build a Variables map from key/value pairs
pub fn variables<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Variables
where
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// One role-tagged pattern of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePattern {
    role: Role,
    pattern: String,
    name: String,
    placeholders: BTreeSet<String>,
}

impl MessagePattern {
    pub fn role(&self) -> Role {
        self.role
    }

    /// The pattern as written
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Variables this pattern references
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.placeholders.iter().map(String::as_str)
    }

    fn first_missing(&self, vars: &Variables) -> Option<&str> {
        self.placeholders().find(|name| !vars.contains_key(*name))
    }
}

/// Ordered, immutable sequence of message patterns
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    patterns: Vec<MessagePattern>,
    env: Environment<'static>,
}

impl MessageTemplate {
    /// Compile a template from (role, pattern) pairs
    pub fn from_messages<S: Into<String>>(messages: impl IntoIterator<Item = (Role, S)>) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        let mut patterns = Vec::new();
        for (index, (role, pattern)) in messages.into_iter().enumerate() {
            let pattern = pattern.into();
            if let Some(token) = disallowed_token(&pattern) {
                return Err(TranslatrError::Template(format!(
                    "{} not allowed in {:?}",
                    token, pattern
                )));
            }

            let name = format!("message-{}", index);
            env.add_template_owned(name.clone(), pattern.clone())
                .map_err(|e| template_error(&pattern, e))?;
            let placeholders = env
                .get_template(&name)
                .map_err(|e| template_error(&pattern, e))?
                .undeclared_variables(false)
                .into_iter()
                .collect();

            patterns.push(MessagePattern {
                role,
                pattern,
                name,
                placeholders,
            });
        }

        if patterns.is_empty() {
            return Err(TranslatrError::Template("template has no messages".to_string()));
        }

        Ok(Self { patterns, env })
    }

    pub fn patterns(&self) -> &[MessagePattern] {
        &self.patterns
    }

    /// Distinct placeholder names, sorted
    pub fn placeholders(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .flat_map(|p| p.placeholders())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Substitute every placeholder, producing one message per pattern
    ///
    /// All variables are checked before anything is rendered. The reported
    /// name comes from the first pattern with a gap. Extra variables are ignored.
    pub fn render(&self, vars: &Variables) -> Result<Vec<Message>> {
        if let Some(name) = self.patterns.iter().find_map(|p| p.first_missing(vars)) {
            return Err(TranslatrError::MissingVariable { name: name.to_string() });
        }

        self.patterns
            .iter()
            .map(|p| {
                let content = self
                    .env
                    .get_template(&p.name)
                    .and_then(|t| t.render(vars))
                    .map_err(|e| template_error(&p.pattern, e))?;
                Ok(Message::new(p.role, content))
            })
            .collect()
    }
}

fn disallowed_token(pattern: &str) -> Option<&'static str> {
    ["{%", "{#"].into_iter().find(|token| pattern.contains(token))
}

fn template_error(pattern: &str, err: minijinja::Error) -> TranslatrError {
    TranslatrError::Template(format!("invalid pattern {:?}: {}", pattern, err))
}
