//! Completeness tracking for records filled in by a structured-output
//! extractor over several conversation turns.
//!
//! An [`Extractor`] returns the raw arguments of one structured-output call.
//! [`Extraction`] applies them to a record type and records which declared
//! fields were actually supplied. Fields left out are reported as missing,
//! in declaration order, and [`Extraction::route`] decides whether to ask
//! for more or continue.

use std::{fmt, sync::Arc};

use recforge_core::{DynamicRecord, RecordType, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};
use tracing::{debug, info};

use crate::error::{ExtractorError, RecforgeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation turn handed to an [`Extractor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Structured-output backend. Implementations return the raw argument object
/// of the call, keyed by field name; keys the backend chose not to fill must
/// be absent or `null`.
pub trait Extractor {
    fn extract(&self, conversation: &[Message], record: &RecordType) -> Result<Json, ExtractorError>;
}

/// Next step after an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Some declared fields were not supplied.
    AskMore(Vec<String>),
    Complete,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::AskMore(_) => f.write_str("missing"),
            Route::Complete => f.write_str("complete"),
        }
    }
}

/// A record built from extractor arguments, plus field bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    record: DynamicRecord,
    supplied: Vec<String>,
    missing: Vec<String>,
}

impl Extraction {
    /// Construct a record from `args`. Declared fields present with a
    /// non-null value count as supplied; everything else is missing and takes
    /// its default. Undeclared keys are ignored.
    pub fn from_arguments(record_type: &Arc<RecordType>, args: &Json) -> Result<Self, ValidationError> {
        let record = match args {
            Json::Object(obj) => record_type.construct(&Json::Object(without_nulls(obj)))?,
            other => record_type.construct(other)?,
        };

        let (supplied, missing) = record_type
            .field_names()
            .map(str::to_string)
            .partition(|name| args.get(name).is_some_and(|v| !v.is_null()));

        Ok(Self {
            record,
            supplied,
            missing,
        })
    }

    /// Like [`from_arguments`](Self::from_arguments), but `args` is
    /// constructed as given: a `null` value is rejected unless the field
    /// accepts any value. Fields left out are reported as missing.
    pub fn from_instance(record_type: &Arc<RecordType>, instance: &Json) -> Result<Self, ValidationError> {
        let record = record_type.construct(instance)?;
        let (supplied, missing) = record_type
            .field_names()
            .map(str::to_string)
            .partition(|name| instance.get(name).is_some());

        Ok(Self {
            record,
            supplied,
            missing,
        })
    }

    pub fn record(&self) -> &DynamicRecord {
        &self.record
    }

    pub fn into_record(self) -> DynamicRecord {
        self.record
    }

    /// Declared fields supplied by the arguments, in declaration order.
    pub fn supplied(&self) -> &[String] {
        &self.supplied
    }

    /// Declared fields not supplied, in declaration order.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn route(&self) -> Route {
        if self.missing.is_empty() {
            info!(record = self.record.type_name(), "record is complete");
            Route::Complete
        } else {
            info!(
                record = self.record.type_name(),
                missing = ?self.missing,
                "record has missing fields"
            );
            Route::AskMore(self.missing.clone())
        }
    }
}

/// Accumulates extractor arguments across turns. Later values for a field
/// replace earlier ones; missing fields are computed over everything supplied
/// so far.
#[derive(Debug, Clone)]
pub struct ExtractionSession {
    record_type: Arc<RecordType>,
    arguments: Map<String, Json>,
    latest: Option<Extraction>,
}

impl ExtractionSession {
    pub fn new(record_type: Arc<RecordType>) -> Self {
        Self {
            record_type,
            arguments: Map::new(),
            latest: None,
        }
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    /// Latest merged extraction, if any turn has been submitted.
    pub fn latest(&self) -> Option<&Extraction> {
        self.latest.as_ref()
    }

    /// Merge one turn's arguments. A turn that fails validation leaves the
    /// session unchanged.
    pub fn submit(&mut self, args: &Json) -> Result<&Extraction, ValidationError> {
        let mut merged = self.arguments.clone();
        match args {
            Json::Object(obj) => merged.extend(without_nulls(obj)),
            other => {
                // Surface the type error from construction.
                self.record_type.construct(other)?;
            }
        }

        let extraction = Extraction::from_arguments(&self.record_type, &Json::Object(merged.clone()))?;
        debug!(
            record = self.record_type.name(),
            supplied = extraction.supplied.len(),
            missing = extraction.missing.len(),
            "merged extraction turn"
        );
        self.arguments = merged;
        Ok(&*self.latest.insert(extraction))
    }

    /// Run `extractor` over `conversation` and merge its output. When data
    /// has already been collected, it is sent ahead of the conversation as a
    /// system message.
    pub fn extract_with(
        &mut self,
        extractor: &dyn Extractor,
        conversation: &[Message],
    ) -> Result<&Extraction, RecforgeError> {
        let mut turns = Vec::with_capacity(conversation.len() + 1);
        if let Some(latest) = &self.latest {
            turns.push(Message::system(format!(
                "Current {} data: {}",
                self.record_type.name(),
                latest.record.to_json()
            )));
        }
        turns.extend_from_slice(conversation);

        let args = extractor
            .extract(&turns, &self.record_type)
            .map_err(RecforgeError::Extractor)?;
        Ok(self.submit(&args)?)
    }

    /// Routing decision for the latest extraction. Before any submission
    /// every declared field is missing.
    pub fn route(&self) -> Route {
        match &self.latest {
            Some(extraction) => extraction.route(),
            None => Route::AskMore(self.record_type.field_names().map(str::to_string).collect()),
        }
    }

    /// Question listing the missing fields with their descriptions, or `None`
    /// when the record is complete.
    pub fn follow_up_prompt(&self) -> Option<String> {
        let missing: Vec<&str> = match &self.latest {
            Some(extraction) => extraction.missing.iter().map(String::as_str).collect(),
            None => self.record_type.field_names().collect(),
        };
        if missing.is_empty() {
            return None;
        }

        let mut prompt = String::from("Please provide the following information:");
        for name in missing {
            let description = self
                .record_type
                .field(name)
                .map(|f| f.description.as_str())
                .unwrap_or_default();
            if description.is_empty() {
                prompt.push_str(&format!("\n- {name}"));
            } else {
                prompt.push_str(&format!("\n- {name}: {description}"));
            }
        }
        Some(prompt)
    }
}

fn without_nulls(obj: &Map<String, Json>) -> Map<String, Json> {
    obj.iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
