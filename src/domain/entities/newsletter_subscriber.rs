#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscriber {
    pub id: String,
    /// Trimmed, unique across all subscribers.
    pub email: String,
}
