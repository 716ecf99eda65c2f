//! Internal macros.

/// Expands to a `rotate_<dir>` method on the tree.
///
/// `$up` is the child of `node` that takes its place, `$down` is the side of
/// that child which receives `node`. The child's `$down` subtree crosses over
/// to become `node`'s new `$up` subtree.
macro_rules! rotation {
    ($dir:ident, $up:ident, $down:ident) => {
        paste::paste! {
            pub(crate) fn [<rotate_ $dir>](&mut self, node: NodeId) {
                let pivot = self.arena[node].$up;
                self.replace_node(node, pivot);

                let crossing = self.arena[pivot].$down;
                self.arena[node].$up = crossing;
                if crossing != NULL_NODE {
                    self.arena[crossing].parent = node;
                }

                self.arena[pivot].$down = node;
                self.arena[node].parent = pivot;
            }
        }
    };
}
