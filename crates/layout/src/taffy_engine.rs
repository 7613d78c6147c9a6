//! A `taffy` tree behind the [`EngineHandle`] capability.
use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::engine::{EngineError, EngineHandle};
use crate::node::Node;
use quire_style::BoxProperty;
use quire_types::Edge;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use taffy::geometry::{Rect, Size};
use taffy::style::{
    AvailableSpace, BoxSizing, Dimension, Display, FlexDirection, LengthPercentage,
    LengthPercentageAuto, Style,
};
use taffy::{Layout, NodeId, TaffyError, TaffyTree};

type SharedTree = Rc<RefCell<TaffyTree<()>>>;

/// The style every bound node starts from: a border-box flex column.
pub fn base_style() -> Style {
    Style {
        display: Display::Flex,
        box_sizing: BoxSizing::BorderBox,
        flex_direction: FlexDirection::Column,
        ..Default::default()
    }
}

fn edge_mut<T>(rect: &mut Rect<T>, edge: Edge) -> &mut T {
    match edge {
        Edge::Top => &mut rect.top,
        Edge::Right => &mut rect.right,
        Edge::Bottom => &mut rect.bottom,
        Edge::Left => &mut rect.left,
    }
}

fn edge_of<T: Copy>(rect: &Rect<T>, edge: Edge) -> T {
    match edge {
        Edge::Top => rect.top,
        Edge::Right => rect.right,
        Edge::Bottom => rect.bottom,
        Edge::Left => rect.left,
    }
}

fn engine_error(err: TaffyError) -> EngineError {
    match err {
        TaffyError::InvalidInputNode(_) => EngineError::StaleHandle,
        other => EngineError::Backend(other.to_string()),
    }
}

/// One node of a [`TaffyEngine`].
#[derive(Clone)]
pub struct TaffyHandle {
    tree: SharedTree,
    id: NodeId,
}

impl fmt::Debug for TaffyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaffyHandle").field("id", &self.id).finish()
    }
}

impl TaffyHandle {
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// A copy of the node's current engine style.
    pub fn style(&self) -> Result<Style, EngineError> {
        let tree = self.borrow_tree()?;
        tree.style(self.id).cloned().map_err(engine_error)
    }

    fn borrow_tree(&self) -> Result<std::cell::Ref<'_, TaffyTree<()>>, EngineError> {
        self.tree
            .try_borrow()
            .map_err(|_| EngineError::Backend("layout tree is being modified".to_string()))
    }

    fn update_style<F>(&self, update: F) -> Result<(), EngineError>
    where
        F: FnOnce(&mut Style) -> Result<(), EngineError>,
    {
        let mut tree = self
            .tree
            .try_borrow_mut()
            .map_err(|_| EngineError::Backend("layout tree is already borrowed".to_string()))?;
        let mut style = tree.style(self.id).map_err(engine_error)?.clone();
        update(&mut style)?;
        tree.set_style(self.id, style).map_err(engine_error)
    }

    fn layout(&self) -> Result<Layout, EngineError> {
        let tree = self.borrow_tree()?;
        tree.layout(self.id).copied().map_err(engine_error)
    }

    /// Distance from each edge of the parent's box to the matching edge of this node.
    fn computed_inset(&self, edge: Edge) -> Result<f32, EngineError> {
        let tree = self.borrow_tree()?;
        let layout = tree.layout(self.id).map_err(engine_error)?;
        let parent = match tree.parent(self.id) {
            Some(parent) => tree.layout(parent).map_err(engine_error)?.size,
            None => layout.size,
        };
        Ok(match edge {
            Edge::Top => layout.location.y,
            Edge::Left => layout.location.x,
            Edge::Right => parent.width - layout.location.x - layout.size.width,
            Edge::Bottom => parent.height - layout.location.y - layout.size.height,
        })
    }
}

impl EngineHandle for TaffyHandle {
    fn set_exact_value(
        &self,
        property: BoxProperty,
        edge: Edge,
        magnitude: f32,
    ) -> Result<(), EngineError> {
        self.update_style(|style| {
            match property {
                BoxProperty::Margin => {
                    *edge_mut(&mut style.margin, edge) = LengthPercentageAuto::length(magnitude)
                }
                BoxProperty::Padding => {
                    *edge_mut(&mut style.padding, edge) = LengthPercentage::length(magnitude)
                }
                BoxProperty::Position => {
                    *edge_mut(&mut style.inset, edge) = LengthPercentageAuto::length(magnitude)
                }
            }
            Ok(())
        })
    }

    fn set_percentage(
        &self,
        property: BoxProperty,
        edge: Edge,
        magnitude: f32,
    ) -> Result<(), EngineError> {
        let fraction = magnitude / 100.0;
        self.update_style(|style| {
            match property {
                BoxProperty::Margin => {
                    *edge_mut(&mut style.margin, edge) = LengthPercentageAuto::percent(fraction)
                }
                BoxProperty::Padding => {
                    *edge_mut(&mut style.padding, edge) = LengthPercentage::percent(fraction)
                }
                BoxProperty::Position => {
                    *edge_mut(&mut style.inset, edge) = LengthPercentageAuto::percent(fraction)
                }
            }
            Ok(())
        })
    }

    fn set_auto(&self, property: BoxProperty, edge: Edge) -> Result<(), EngineError> {
        self.update_style(|style| match property {
            BoxProperty::Margin => {
                *edge_mut(&mut style.margin, edge) = LengthPercentageAuto::auto();
                Ok(())
            }
            BoxProperty::Position => {
                *edge_mut(&mut style.inset, edge) = LengthPercentageAuto::auto();
                Ok(())
            }
            BoxProperty::Padding => Err(EngineError::UnsupportedAuto(property, edge)),
        })
    }

    fn computed_width(&self) -> Result<f32, EngineError> {
        Ok(self.layout()?.size.width)
    }

    fn computed_height(&self) -> Result<f32, EngineError> {
        Ok(self.layout()?.size.height)
    }

    fn computed_edge(&self, property: BoxProperty, edge: Edge) -> Result<f32, EngineError> {
        match property {
            BoxProperty::Margin => Ok(edge_of(&self.layout()?.margin, edge)),
            BoxProperty::Padding => Ok(edge_of(&self.layout()?.padding, edge)),
            BoxProperty::Position => self.computed_inset(edge),
        }
    }
}

/// Owns a `taffy` tree and binds document nodes to it.
pub struct TaffyEngine {
    tree: SharedTree,
    config: LayoutConfig,
}

impl TaffyEngine {
    pub fn new(config: LayoutConfig) -> Self {
        let mut tree = TaffyTree::new();
        if !config.use_rounding {
            tree.disable_rounding();
        }
        Self {
            tree: Rc::new(RefCell::new(tree)),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn handle(&self, id: NodeId) -> TaffyHandle {
        TaffyHandle {
            tree: Rc::clone(&self.tree),
            id,
        }
    }

    pub fn node_count(&self) -> usize {
        self.tree.borrow().total_node_count()
    }

    /// Creates an engine node for `node` and each of its descendants and
    /// attaches the handles. Returns the engine id of `node`.
    ///
    /// Engine nodes start from [`base_style`]; style values are written
    /// afterwards through the handles.
    pub fn bind(&self, node: &mut Node) -> Result<NodeId, LayoutError> {
        let child_ids = node
            .children
            .iter_mut()
            .map(|child| self.bind(child))
            .collect::<Result<Vec<_>, _>>()?;

        let id = self
            .tree
            .borrow_mut()
            .new_with_children(base_style(), &child_ids)
            .map_err(|e| LayoutError::Taffy(format!("Taffy new_with_children error: {:?}", e)))?;

        if node.is_bound() {
            log::debug!("Rebinding {} node to engine node {:?}", node.kind.as_str(), id);
        }
        node.engine = Some(Rc::new(self.handle(id)));
        Ok(id)
    }

    /// Solves the layout of the subtree rooted at `root`.
    ///
    /// A root without an explicit size is given the configured available
    /// space as its size, so percentages have a definite base.
    pub fn compute(&self, root: NodeId) -> Result<(), LayoutError> {
        let root_handle = self.handle(root);
        let config = self.config;
        root_handle.update_style(|style| {
            if let Some(width) = config.available_width {
                if style.size.width == Dimension::auto() {
                    style.size.width = Dimension::length(width);
                }
            }
            if let Some(height) = config.available_height {
                if style.size.height == Dimension::auto() {
                    style.size.height = Dimension::length(height);
                }
            }
            Ok(())
        })?;

        let available_space = Size {
            width: config
                .available_width
                .map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
            height: config
                .available_height
                .map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
        };

        self.tree
            .borrow_mut()
            .compute_layout(root, available_space)
            .map_err(|e| LayoutError::Taffy(format!("Taffy compute_layout error: {:?}", e)))?;
        log::debug!(
            "Computed layout for {} engine nodes with {:?}",
            self.node_count(),
            available_space
        );
        Ok(())
    }
}

impl Default for TaffyEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
