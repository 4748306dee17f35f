/// A field the trained entity-recognition model may offer a span for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonField {
    Owner,
    SurveyNumber,
    HissaNumber,
    Village,
    Taluk,
    District,
}

/// A candidate span for a singleton field, with the model's confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub confidence: f32,
}

/// Capability boundary for the trained named-entity-recognition model. Rule
/// output always takes priority (see `crate::extractor`); this trait exists
/// so a real model can supplement fields the regex layer misses.
pub trait EntityModel: Send + Sync {
    fn singleton_candidates(&self, field: SingletonField, text: &str) -> Vec<Candidate>;
}

/// Offers nothing. The default model: the extractor is fully exercisable
/// with only the rule layer active.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEntityModel;

impl EntityModel for NullEntityModel {
    fn singleton_candidates(&self, _field: SingletonField, _text: &str) -> Vec<Candidate> {
        Vec::new()
    }
}
