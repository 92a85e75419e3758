//! Outcome of feeding an input event to the map.

/// What the host shell should do after an event was handled.
///
/// `consumed` tells the shell to suppress its own default handling (page
/// scroll on wheel, focus traversal on arrows).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    pub consumed: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            consumed: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            consumed: false,
        }
    }

    /// Same impact, also marked as consumed.
    #[must_use]
    pub const fn consume(self) -> Self {
        Self {
            consumed: true,
            ..self
        }
    }

    pub const fn from_change(changed: bool) -> Self {
        Self {
            requires_redraw: changed,
            consumed: false,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            consumed: self.consumed || other.consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_is_a_union() {
        let impact = EventImpact::redraw().combine(EventImpact::none().consume());
        assert!(impact.requires_redraw);
        assert!(impact.consumed);
        assert_eq!(EventImpact::none().combine(EventImpact::none()), EventImpact::none());
    }
}
