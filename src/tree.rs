//! A multi-way prefix tree that stores strings and completes prefixes.

use core::fmt;
use crate::node::TreeNode;

/// A multi-way prefix tree (trie) over strings.
///
/// Each stored string is a path of `char`s from the root down to a node
/// marked as terminal, and strings with a common prefix share the nodes of
/// that prefix. Membership tests and prefix completion therefore cost time
/// proportional to the length of the query (plus, for completion, the size
/// of the matched subtree), independent of how many strings the tree holds.
///
/// There is no removal operation: a tree only ever grows.
///
/// # Examples
///
/// ```
/// use wordtrie::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// tree.insert("sea");
/// tree.insert("seashells");
/// tree.insert("shore");
///
/// assert!(tree.contains("sea"));
/// assert!(!tree.contains("se"));
/// assert_eq!(tree.complete("se"), ["sea", "seashells"]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrefixTree {
    root: TreeNode,
    len: usize,
}

impl PrefixTree {
    /// Creates an empty tree. The same as `Default`.
    pub const fn new() -> Self {
        PrefixTree { root: TreeNode::root(), len: 0 }
    }

    /// Returns the number of distinct strings stored in this tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if and only if the root has no children.
    ///
    /// This deliberately checks the child count rather than
    /// [`len()`](PrefixTree::len): inserting the empty string adds no
    /// children, so a tree holding only `""` still reports empty here even
    /// though `len() == 1`. Callers that want to treat the empty string as
    /// an ordinary entry should check `len() == 0` instead.
    pub fn is_empty(&self) -> bool {
        self.root.num_children() == 0
    }

    /// Returns `true` if and only if `s` was previously inserted.
    ///
    /// Prefixes of stored strings do not count: after inserting `"sells"`,
    /// `contains("sell")` is still `false`. The empty string is contained
    /// only if it was itself inserted.
    pub fn contains(&self, s: &str) -> bool {
        self.find_node(s).0.is_some_and(TreeNode::is_terminal)
    }

    /// Inserts `s` into the tree, creating nodes along its path as needed.
    ///
    /// Returns `true` if an insertion happened, and `false` if the string
    /// was already stored, in which case nothing changes — re-inserting is
    /// a no-op and does not affect [`len()`](PrefixTree::len).
    pub fn insert(&mut self, s: &str) -> bool {
        if self.contains(s) {
            return false;
        }

        let mut node = &mut self.root;

        for symbol in s.chars() {
            node = node.child_or_insert(symbol);
        }

        node.set_terminal();
        self.len += 1;

        true
    }

    /// Returns the deepest node that matches a prefix of `s`, along with
    /// its depth, i.e. the number of symbols matched.
    ///
    /// If every symbol of `s` matches, the landing node is returned whether
    /// or not it is terminal; on the first symbol with no matching child
    /// the walk stops and yields `None`. The empty string always matches
    /// the root at depth 0.
    fn find_node(&self, s: &str) -> (Option<&TreeNode>, usize) {
        let mut node = &self.root;
        let mut depth = 0;

        for symbol in s.chars() {
            match node.get_child(symbol) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => return (None, depth),
            }
        }

        (Some(node), depth)
    }

    /// Returns every stored string that starts with `prefix`, in
    /// lexicographic order.
    ///
    /// The result includes `prefix` itself if it is stored. If no stored
    /// string starts with `prefix`, the result is empty.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let mut completions = Vec::new();

        let Some(node) = self.find_node(prefix).0 else {
            return completions;
        };

        // Pre-order depth-first walk with an explicit stack, so the depth
        // reached is bounded by the longest stored string rather than by
        // the call stack. Children are pushed in reverse, making the
        // smallest symbol pop first and the output lexicographic.
        let mut stack = vec![(node, String::from(prefix))];

        while let Some((node, string)) = stack.pop() {
            if node.is_terminal() {
                completions.push(string.clone());
            }

            for child in node.children().iter().rev() {
                let mut extended = string.clone();
                extended.push(child.symbol());
                stack.push((child, extended));
            }
        }

        completions
    }

    /// Returns every string stored in this tree, in lexicographic order.
    pub fn strings(&self) -> Vec<String> {
        self.complete("")
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        PrefixTree::new()
    }
}

/// Renders the tree as the set of strings it stores,
/// not as the node structure.
impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrefixTree")?;
        f.debug_set().entries(self.strings()).finish()
    }
}

impl<S, const N: usize> From<[S; N]> for PrefixTree
where
    S: AsRef<str>
{
    fn from(strings: [S; N]) -> Self {
        strings.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>
    {
        let mut tree = PrefixTree::default();
        tree.extend(iter);
        tree
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>
    {
        for s in iter {
            self.insert(s.as_ref());
        }
    }
}
