// Call-to-action targets - parsed once at startup from inline descriptors

/// What a call-to-action control does when activated.
///
/// The site content declares CTA targets as inline descriptors of the shape
/// `navigateTo('<id>')`. Parsing happens once, at construction; anything that
/// does not match the shape becomes `None` and activating it is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CtaAction {
    Navigate(String),
    None,
}

impl CtaAction {
    /// Extracts the quoted page id from a `navigateTo('<id>')`-shaped
    /// descriptor. Malformed descriptors yield `CtaAction::None`; nothing is
    /// surfaced to the caller.
    pub fn parse(descriptor: &str) -> Self {
        let inner = descriptor
            .trim()
            .strip_prefix("navigateTo('")
            .and_then(|rest| rest.strip_suffix("')"));

        match inner {
            Some(id) if !id.is_empty() && !id.contains('\'') => {
                CtaAction::Navigate(id.to_string())
            }
            _ => CtaAction::None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            CtaAction::Navigate(id) => Some(id),
            CtaAction::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_descriptor() {
        assert_eq!(
            CtaAction::parse("navigateTo('about')"),
            CtaAction::Navigate("about".to_string())
        );
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(
            CtaAction::parse("  navigateTo('services')  "),
            CtaAction::Navigate("services".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_other_calls() {
        assert_eq!(CtaAction::parse("doSomethingElse()"), CtaAction::None);
    }

    #[test]
    fn test_parse_rejects_empty_or_broken_quotes() {
        assert_eq!(CtaAction::parse("navigateTo('')"), CtaAction::None);
        assert_eq!(CtaAction::parse("navigateTo('about)"), CtaAction::None);
        assert_eq!(CtaAction::parse("navigateTo('a'b')"), CtaAction::None);
        assert_eq!(CtaAction::parse(""), CtaAction::None);
    }
}
