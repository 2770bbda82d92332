use caren_core::ActionRecord;

/// Fluent builder for [`ActionRecord`] in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: ActionRecord,
}

impl RecordBuilder {
    pub fn action(action: &str) -> Self {
        Self {
            record: ActionRecord::new(action),
        }
    }

    /// A record with no action text at all.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn at(mut self, action_time: &str) -> Self {
        self.record.action_time = Some(action_time.to_string());
        self
    }

    pub fn source_time(mut self, source_time: &str) -> Self {
        self.record.source_time = Some(source_time.to_string());
        self
    }

    pub fn identity(mut self, identity: &str) -> Self {
        self.record.identity = Some(identity.to_string());
        self
    }

    pub fn context(mut self, context: &str) -> Self {
        self.record.context = Some(context.to_string());
        self
    }

    pub fn metadata(mut self, metadata: &str) -> Self {
        self.record.metadata = Some(metadata.to_string());
        self
    }

    pub fn build(self) -> ActionRecord {
        self.record
    }
}
