use once_cell::sync::Lazy;

use crate::table::CODES;

pub const EOS_SYMBOL: usize = crate::table::EOS;

struct Node {
    children: [Option<usize>; 2],
    symbol: Option<usize>,
    all_ones: bool,
}

impl Node {
    fn leaf(all_ones: bool) -> Self {
        Self { children: [None, None], symbol: None, all_ones }
    }
}

/// Binary tree of the canonical Huffman code book, built once and shared
/// by every decode call.
pub struct Tree {
    nodes: Vec<Node>,
}

static TREE: Lazy<Tree> = Lazy::new(Tree::build);

impl Tree {
    pub fn shared() -> &'static Tree {
        &TREE
    }

    fn build() -> Self {
        let mut tree = Tree { nodes: vec![Node::leaf(true)] };

        for (symbol, &(code, bits)) in CODES.iter().enumerate() {
            let mut node = 0usize;
            for i in (0..bits).rev() {
                let bit = (code >> i) & 1 == 1;
                let side = bit as usize;
                node = match tree.nodes[node].children[side] {
                    Some(next) => next,
                    None => {
                        let parent_all_ones = tree.nodes[node].all_ones;
                        tree.nodes.push(Node::leaf(parent_all_ones && bit));
                        let next = tree.nodes.len() - 1;
                        tree.nodes[node].children[side] = Some(next);
                        next
                    }
                };
            }
            tree.nodes[node].symbol = Some(symbol);
        }

        tree
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn step(&self, node: usize, bit: bool) -> Option<usize> {
        self.nodes[node].children[bit as usize]
    }

    pub fn symbol(&self, node: usize) -> Option<usize> {
        self.nodes[node].symbol
    }

    pub fn is_ones_prefix(&self, node: usize) -> bool {
        self.nodes[node].all_ones
    }
}
