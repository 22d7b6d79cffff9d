use super::Message;

/// Static definition of one guided step: a fixed context prefix plus the
/// options that shape how the request form behaves for that step.
///
/// The prefix is owned by the scenario and read-only for its whole lifetime,
/// sessions copy it and never write back.
pub struct Scenario {
    pub order_index: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub context: Vec<Message>,
    pub model: Option<&'static str>,
    pub params_enabled: bool,
    pub suggested_input: Option<&'static str>,
    pub commentary: Option<&'static str>,
}
