use crate::cpi::ArtifactKind;

/// Chooses which artifact kind the artifacts pane shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSelector {
    active: usize,
}

impl TabSelector {
    pub fn tabs() -> impl Iterator<Item = (ArtifactKind, &'static str)> {
        ArtifactKind::ALL.into_iter().map(|k| (k, k.label()))
    }

    pub fn active(&self) -> ArtifactKind {
        ArtifactKind::ALL[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Rotates to the next tab and returns the newly active kind.
    pub fn next(&mut self) -> ArtifactKind {
        self.rotate(1)
    }

    pub fn prev(&mut self) -> ArtifactKind {
        self.rotate(ArtifactKind::ALL.len() - 1)
    }

    /// Resynchronises with an externally chosen kind without rotating.
    pub fn set_active(&mut self, kind: ArtifactKind) {
        self.active = kind.index();
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    fn rotate(&mut self, step: usize) -> ArtifactKind {
        self.active = (self.active + step) % ArtifactKind::ALL.len();
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_integration_flows() {
        assert_eq!(TabSelector::default().active(), ArtifactKind::IntegrationFlow);
    }

    #[test]
    fn four_rights_return_to_start() {
        let mut t = TabSelector::default();
        let seen: Vec<ArtifactKind> = (0..4).map(|_| t.next()).collect();
        assert_eq!(
            seen,
            vec![
                ArtifactKind::ValueMapping,
                ArtifactKind::MessageMapping,
                ArtifactKind::ScriptCollection,
                ArtifactKind::IntegrationFlow,
            ]
        );
    }

    #[test]
    fn left_from_first_wraps_to_last() {
        let mut t = TabSelector::default();
        assert_eq!(t.prev(), ArtifactKind::ScriptCollection);
        assert_eq!(t.next(), ArtifactKind::IntegrationFlow);
    }

    #[test]
    fn set_active_does_not_rotate() {
        let mut t = TabSelector::default();
        t.set_active(ArtifactKind::MessageMapping);
        assert_eq!(t.active_index(), 2);
        t.reset();
        assert_eq!(t.active_index(), 0);
    }

    #[test]
    fn labels_in_kind_order() {
        let labels: Vec<&str> = TabSelector::tabs().map(|(_, l)| l).collect();
        assert_eq!(
            labels,
            vec![
                "Integration flows",
                "Value mappings",
                "Message mappings",
                "Script collections"
            ]
        );
    }
}
