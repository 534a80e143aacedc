//! Embedding boundary permissions

/// A capability granted to the embedded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxPermission {
    AllowScripts,
    AllowSameOrigin,
    AllowForms,
    AllowPopups,
    AllowPresentation,
}

impl SandboxPermission {
    /// Attribute token
    pub fn token(self) -> &'static str {
        match self {
            Self::AllowScripts => "allow-scripts",
            Self::AllowSameOrigin => "allow-same-origin",
            Self::AllowForms => "allow-forms",
            Self::AllowPopups => "allow-popups",
            Self::AllowPresentation => "allow-presentation",
        }
    }
}

/// The fixed permission set every preview navigation carries.
///
/// Exactly these five, in this order. Adding or removing one changes what
/// embedded sites are allowed to do.
pub const PREVIEW_SANDBOX: &[SandboxPermission] = &[
    SandboxPermission::AllowScripts,
    SandboxPermission::AllowSameOrigin,
    SandboxPermission::AllowForms,
    SandboxPermission::AllowPopups,
    SandboxPermission::AllowPresentation,
];

/// Space-separated sandbox attribute value
pub fn sandbox_attribute(permissions: &[SandboxPermission]) -> String {
    permissions
        .iter()
        .map(|p| p.token())
        .collect::<Vec<_>>()
        .join(" ")
}
