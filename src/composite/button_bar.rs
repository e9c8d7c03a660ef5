use crate::error::Result;
use crate::nav::tree::NavTree;
use crate::nav::types::NodeId;
use crate::widgets::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl NavTree {
    /// A strip of equally sized buttons. The bar is a panel-less grid, so
    /// entering it puts the cursor straight on the first button.
    pub fn add_button_bar(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        orientation: BarOrientation,
        buttons: Vec<Button>,
    ) -> Result<NodeId> {
        let bar = self.add_content_grid(parent, identifier, true)?;
        let share = 1.0 / buttons.len().max(1) as f32;
        let size = match orientation {
            BarOrientation::Horizontal => [share, 1.0],
            BarOrientation::Vertical => [1.0, share],
        };
        for button in buttons {
            let label = button.label().to_owned();
            let id = self.add_content(bar, label, button)?;
            self.set_size(id, size)?;
        }
        Ok(bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::nav::types::{Anchor, GridLayout, SelectionDimension};

    #[test]
    fn test_buttons_share_the_bar() {
        let mut tree = NavTree::new(
            &NavConfig::default(),
            GridLayout::Default,
            SelectionDimension::Deep,
        );
        let bottom = tree.grid_panel(tree.root(), Anchor::BottomCenter).unwrap();
        let bar = tree
            .add_button_bar(
                bottom,
                "actions",
                BarOrientation::Vertical,
                vec![Button::new("A"), Button::new("B"), Button::new("C"), Button::new("D")],
            )
            .unwrap();
        let children = tree.node(bar).unwrap().children().to_vec();
        assert_eq!(children.len(), 4);
        assert_eq!(tree.node(children[2]).unwrap().size, [1.0, 0.25]);
        assert!(tree.grid(bar).unwrap().is_invisible());
        assert_eq!(tree.grid(bar).unwrap().panel_count(), 0);
    }
}
