//! Component-tree construction strategies.
//!
//! Every strategy feeds sealed components into a shared
//! [`TreeAssembler`](crate::tree::TreeAssembler) and therefore produces the
//! same tree for the same input, up to the numbering of components and the
//! order of child lists.

mod flood;
mod linear_time;
mod local_flooding;

use crate::{error::Result, pixel_map::PixelMap, polarity::Polarity, tree::ComponentTree};

/// Selects the algorithm used to build a [`ComponentTree`].
///
/// # Examples
/// ```
/// use mser_core::ComponentTreeMethod;
///
/// assert_eq!(ComponentTreeMethod::default(), ComponentTreeMethod::LinearTime);
/// assert_eq!(ComponentTreeMethod::ALL.len(), 3);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTreeMethod {
    /// Single sweep over intensity buckets with an incremental union-find.
    #[default]
    LinearTime,
    /// Re-floods the threshold set at every occupied level. Quadratic in the
    /// worst case but easy to audit.
    Flood,
    /// Local flooding from a seed pixel with a boundary heap and a stack of
    /// open components (Nistér and Stewénius, 2008).
    LocalFlooding,
}

impl ComponentTreeMethod {
    /// Every available strategy.
    pub const ALL: [Self; 3] = [Self::LinearTime, Self::Flood, Self::LocalFlooding];

    /// Returns a short lowercase name for the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearTime => "linear_time",
            Self::Flood => "flood",
            Self::LocalFlooding => "local_flooding",
        }
    }
}

pub(crate) fn construct(
    map: &PixelMap,
    method: ComponentTreeMethod,
    polarity: Polarity,
) -> Result<ComponentTree> {
    let assembler = match method {
        ComponentTreeMethod::LinearTime => linear_time::build(map, polarity)?,
        ComponentTreeMethod::Flood => flood::build(map, polarity)?,
        ComponentTreeMethod::LocalFlooding => local_flooding::build(map, polarity)?,
    };
    assembler.finish(map, method)
}
