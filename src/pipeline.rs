use crate::error::PipelineError;
use quire_layout::{LayoutConfig, Node, TaffyEngine, apply_box_styles};
use quire_types::Size;

/// Binds a node tree to a fresh `taffy` engine, pushes every node's box
/// styles into it and solves the layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutPipeline {
    config: LayoutConfig,
}

impl LayoutPipeline {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `root` in place. Every node ends up bound, so the readers in
    /// `quire_layout::dimension` report solved geometry afterwards.
    ///
    /// The returned engine owns the tree; the handles on the nodes keep it
    /// alive on their own as well.
    pub fn run(&self, root: &mut Node) -> Result<TaffyEngine, PipelineError> {
        let engine = TaffyEngine::new(self.config);
        let root_id = engine.bind(root)?;
        log::debug!("Bound {} nodes to the layout engine", engine.node_count());

        apply_box_styles(root)?;
        engine.compute(root_id)?;
        Ok(engine)
    }

    /// Parses a JSON node tree and lays it out.
    pub fn run_json(&self, json: &str) -> Result<Node, PipelineError> {
        let mut root = Node::from_json(json)?;
        self.run(&mut root)?;
        Ok(root)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: LayoutConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_available_size(mut self, width: f32, height: f32) -> Self {
        self.config = self.config.with_available_size(Size::new(width, height));
        self
    }

    /// Lets the root size itself to its content instead of the page.
    pub fn with_max_content(mut self) -> Self {
        self.config.available_width = None;
        self.config.available_height = None;
        self
    }

    pub fn with_rounding(mut self, use_rounding: bool) -> Self {
        self.config.use_rounding = use_rounding;
        self
    }

    pub fn build(self) -> LayoutPipeline {
        LayoutPipeline::new(self.config)
    }
}
