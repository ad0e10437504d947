use ignore::{Walk, WalkBuilder};
use log::debug;
use std::path::Path;

/// Configures and builds the `ignore::Walk` for a root directory.
///
/// Every entry under the root is visited: hidden files, `.gitignore`d paths
/// and VCS directories are all yielded. Directory symlinks are not followed.
pub(super) fn build_walker(root: &Path) -> Walk {
    let mut walker_builder = WalkBuilder::new(root);

    walker_builder.standard_filters(false);
    debug!("Configuring WalkBuilder: standard_filters disabled.");

    walker_builder.follow_links(false);
    walker_builder.max_depth(None);
    debug!("Recursion enabled (no max depth), symlinked directories not followed.");

    walker_builder.build()
}
