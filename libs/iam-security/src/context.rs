use secrecy::SecretString;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// `SecurityContext` carries the authenticated principal of a request together
/// with the request's cancellation scope.
///
/// It is built by the authentication layer once per request and passed by
/// reference through every call that may suspend on I/O. Adapters must stop
/// work when [`SecurityContext::cancellation_token`] fires.
#[derive(Debug, Clone)]
pub struct SecurityContext {
    /// Subject ID: the authenticated user or service account making the request.
    subject_id: Uuid,
    /// Subject type classification (e.g., "user", "service_account").
    subject_type: Option<String>,
    /// Original bearer token, forwarded to federated services when allowed.
    /// Wrapped in `SecretString` so `Debug` redacts the value automatically.
    bearer_token: Option<SecretString>,
    /// Cancellation scope of the originating request.
    cancellation: CancellationToken,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous `SecurityContext` with a nil subject and a fresh
    /// cancellation scope.
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Get the subject ID associated with the security context
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    /// Get the subject type classification.
    #[must_use]
    pub fn subject_type(&self) -> Option<&str> {
        self.subject_type.as_deref()
    }

    /// Get the original bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }

    /// Cancellation token of the request this context belongs to.
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Rebind the same principal to another cancellation scope.
    #[must_use]
    pub fn with_cancellation(&self, cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            ..self.clone()
        }
    }

    /// Derive a context whose cancellation is a child of this one: cancelling
    /// the parent cancels the child, not the other way round.
    #[must_use]
    pub fn child(&self) -> Self {
        self.with_cancellation(self.cancellation.child_token())
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    subject_id: Option<Uuid>,
    subject_type: Option<String>,
    bearer_token: Option<SecretString>,
    cancellation: Option<CancellationToken>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn subject_type(mut self, subject_type: &str) -> Self {
        self.subject_type = Some(subject_type.to_owned());
        self
    }

    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<SecretString>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            subject_id: self.subject_id.unwrap_or_default(),
            subject_type: self.subject_type,
            bearer_token: self.bearer_token,
            cancellation: self.cancellation.unwrap_or_default(),
        }
    }
}
