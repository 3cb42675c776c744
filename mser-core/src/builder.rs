//! Builder configuration for component-tree construction.
//!
//! Collects the construction strategy, neighborhood, polarity and the
//! optional integrity check that runs after every build.

use tracing::{debug, instrument, warn};

use crate::{
    construct::{ComponentTreeMethod, construct},
    error::{ComponentTreeError, Result},
    pixel_map::{Connectivity, PixelMap},
    polarity::Polarity,
    tree::ComponentTree,
};

/// Configures and constructs [`ComponentTree`] instances.
///
/// # Examples
/// ```
/// use mser_core::{ComponentTreeBuilder, ComponentTreeMethod, Connectivity, Polarity};
///
/// let tree = ComponentTreeBuilder::new()
///     .with_method(ComponentTreeMethod::Flood)
///     .with_connectivity(Connectivity::Eight)
///     .with_polarity(Polarity::MaxTree)
///     .with_validation(true)
///     .build_from_grid(2, 2, &[0, 9, 9, 0])
///     .expect("grid is valid");
/// assert_eq!(tree.root().map(|root| root.level()), Some(0));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTreeBuilder {
    method: ComponentTreeMethod,
    connectivity: Connectivity,
    polarity: Polarity,
    validate: bool,
}

impl Default for ComponentTreeBuilder {
    fn default() -> Self {
        Self {
            method: ComponentTreeMethod::LinearTime,
            connectivity: Connectivity::Four,
            polarity: Polarity::MinTree,
            validate: false,
        }
    }
}

impl ComponentTreeBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use mser_core::{ComponentTreeBuilder, ComponentTreeMethod, Connectivity, Polarity};
    ///
    /// let builder = ComponentTreeBuilder::new();
    /// assert_eq!(builder.method(), ComponentTreeMethod::LinearTime);
    /// assert_eq!(builder.connectivity(), Connectivity::Four);
    /// assert_eq!(builder.polarity(), Polarity::MinTree);
    /// assert!(!builder.validates());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the construction strategy.
    #[must_use]
    pub fn with_method(mut self, method: ComponentTreeMethod) -> Self {
        self.method = method;
        self
    }

    /// Returns the configured construction strategy.
    #[must_use]
    pub fn method(&self) -> ComponentTreeMethod {
        self.method
    }

    /// Sets the neighborhood used by [`ComponentTreeBuilder::build_from_grid`].
    ///
    /// [`ComponentTreeBuilder::build`] always uses the connectivity of the
    /// supplied [`PixelMap`].
    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Returns the configured neighborhood.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Chooses between a min-tree and a max-tree.
    #[must_use]
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Returns the configured polarity.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Enables or disables [`ComponentTree::validate`] after each build.
    ///
    /// # Examples
    /// ```
    /// use mser_core::ComponentTreeBuilder;
    ///
    /// assert!(ComponentTreeBuilder::new().with_validation(true).validates());
    /// ```
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Returns `true` when builds are validated.
    #[must_use]
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Builds the component tree of `map`.
    ///
    /// # Errors
    /// Returns [`ComponentTreeError::EmptyInput`] for a map without pixels and
    /// [`ComponentTreeError::InvariantViolation`] when construction or the
    /// optional validation detects a corrupt tree. No partial tree is ever
    /// returned.
    ///
    /// # Examples
    /// ```
    /// use mser_core::{ComponentTreeBuilder, Connectivity, PixelMap};
    ///
    /// let map = PixelMap::new(4, 4, vec![100; 16], Connectivity::Eight)?;
    /// let tree = ComponentTreeBuilder::new().build(&map)?;
    /// let root = tree.root().expect("one root");
    /// assert_eq!((root.level(), root.size(), root.children().len()), (100, 16, 0));
    /// # Ok::<(), mser_core::ComponentTreeError>(())
    /// ```
    #[instrument(
        name = "component_tree.build",
        err,
        skip(self, map),
        fields(
            width = map.width(),
            height = map.height(),
            pixels = map.len(),
            method = self.method.name(),
            connectivity = map.connectivity().degree(),
            polarity = ?self.polarity,
        ),
    )]
    pub fn build(&self, map: &PixelMap) -> Result<ComponentTree> {
        if map.is_empty() {
            warn!("pixel map is empty, returning error");
            return Err(ComponentTreeError::EmptyInput);
        }

        let tree = construct(map, self.method, self.polarity)?;
        if self.validate
            && let Err(error) = tree.validate()
        {
            warn!(code = %error.code(), %error, "component tree failed validation");
            return Err(error);
        }

        debug!(
            components = tree.len(),
            roots = tree.root_ids().len(),
            "component tree built"
        );
        Ok(tree)
    }

    /// Builds a [`PixelMap`] from row-major `data` with the configured
    /// connectivity, then builds its component tree.
    ///
    /// # Errors
    /// Returns [`ComponentTreeError::EmptyInput`] when `data` is empty, any
    /// [`PixelMap::new`] error for malformed dimensions, and the errors of
    /// [`ComponentTreeBuilder::build`].
    ///
    /// # Examples
    /// ```
    /// use mser_core::{ComponentTreeBuilder, ComponentTreeError};
    ///
    /// let err = ComponentTreeBuilder::new().build_from_grid(0, 0, &[]).unwrap_err();
    /// assert_eq!(err, ComponentTreeError::EmptyInput);
    /// ```
    pub fn build_from_grid(&self, width: usize, height: usize, data: &[u8]) -> Result<ComponentTree> {
        if data.is_empty() {
            warn!(width, height, "grid is empty, returning error");
            return Err(ComponentTreeError::EmptyInput);
        }
        let map = PixelMap::new(width, height, data.to_vec(), self.connectivity)?;
        self.build(&map)
    }
}
