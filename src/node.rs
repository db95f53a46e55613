//! The per-symbol node of the prefix tree.

/// A single node of a [`PrefixTree`](crate::PrefixTree).
///
/// Each node carries one symbol of one or more stored strings; the symbols
/// on the path from the root down to a node spell the prefix that node
/// stands for. Children are kept sorted by symbol, so lookups can binary
/// search and traversals yield deterministic, lexicographic output.
///
/// Nodes are exclusively owned by their parent. There is no way to remove
/// a child once added.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TreeNode {
    symbol: char,
    terminal: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) const fn root() -> Self {
        // the symbol of the root is never part of any string,
        // so we are free to use any value
        TreeNode::with_symbol('\0')
    }

    /// Creates a non-terminal node carrying `symbol`, with no children.
    pub const fn with_symbol(symbol: char) -> Self {
        TreeNode {
            symbol,
            terminal: false,
            children: Vec::new(),
        }
    }

    /// The symbol this node represents.
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns `true` if and only if some stored string ends exactly here.
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Marks this node as the end of a stored string.
    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    /// Returns `true` if and only if a child keyed by `symbol` exists.
    pub fn has_child(&self, symbol: char) -> bool {
        self.get_child(symbol).is_some()
    }

    /// Returns the child keyed by `symbol`, if present.
    pub fn get_child(&self, symbol: char) -> Option<&TreeNode> {
        let index = self
            .children
            .binary_search_by_key(&symbol, |child| child.symbol)
            .ok()?;

        Some(&self.children[index])
    }

    /// Inserts `node`, keyed by its own symbol, keeping the children sorted.
    ///
    /// A no-op if a child with the same symbol already exists: overwriting
    /// would silently drop that child's whole subtree, and the tree never
    /// inserts the same symbol twice under one parent anyway.
    pub fn add_child(&mut self, node: TreeNode) {
        if let Err(index) = self
            .children
            .binary_search_by_key(&node.symbol, |child| child.symbol)
        {
            self.children.insert(index, node);
        }
    }

    /// Returns the child keyed by `symbol`, creating it first if missing.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> &mut TreeNode {
        let index = match self
            .children
            .binary_search_by_key(&symbol, |child| child.symbol)
        {
            Ok(index) => index,
            Err(index) => {
                self.children.insert(index, TreeNode::with_symbol(symbol));
                index
            }
        };

        &mut self.children[index]
    }

    /// The number of direct children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// The children of this node, sorted by symbol.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_stay_sorted_and_unique() {
        let mut node = TreeNode::root();

        assert_eq!(node.num_children(), 0);
        assert!(!node.has_child('b'));

        node.add_child(TreeNode::with_symbol('d'));
        node.add_child(TreeNode::with_symbol('b'));
        node.add_child(TreeNode::with_symbol('c'));

        assert_eq!(node.num_children(), 3);
        assert!(node.has_child('b'));
        assert!(node.has_child('c'));
        assert!(node.has_child('d'));
        assert!(!node.has_child('a'));

        let symbols: Vec<char> = node.children().iter().map(TreeNode::symbol).collect();
        assert_eq!(symbols, ['b', 'c', 'd']);
    }

    #[test]
    fn add_child_does_not_overwrite() {
        let mut node = TreeNode::root();

        node.child_or_insert('x').set_terminal();
        node.add_child(TreeNode::with_symbol('x'));

        assert_eq!(node.num_children(), 1);
        assert!(node.get_child('x').is_some_and(TreeNode::is_terminal));
    }

    #[test]
    fn child_or_insert_reuses_existing_children() {
        let mut node = TreeNode::root();

        node.child_or_insert('q').set_terminal();
        assert!(node.child_or_insert('q').is_terminal());
        assert_eq!(node.num_children(), 1);
    }
}
