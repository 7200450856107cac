/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Huffman tree construction and code derivation
//!
//! The tree is never transmitted. The decoder rebuilds it from the
//! frequency table by running [`HuffmanTree::new`] again, so the
//! construction below must stay bit for bit reproducible: a linear
//! scan for the minimum where the earliest node wins ties, the first
//! pick becomes the left child, and merged nodes go to the back of
//! the working list.
use alloc::vec;
use alloc::vec::Vec;

use crate::constants::MAX_SYMBOLS;
use crate::errors::MakiErrors;
use crate::frequency::FrequencyTable;

/// A node in the tree arena
///
/// Children are indices into [`HuffmanTree`]'s node list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf { symbol: u8, weight: u64 },
    Internal { left: usize, right: usize, weight: u64 }
}

impl HuffmanNode {
    pub const fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight
        }
    }
}

/// A Huffman tree stored as an arena of nodes
///
/// Leaves occupy the first `n` slots in frequency table order,
/// internal nodes follow in the order they were created, and the
/// root is always the last node.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>
}

impl HuffmanTree {
    /// Build a tree from a frequency table
    ///
    /// # Errors
    /// An empty table has no tree
    pub fn new(table: &FrequencyTable) -> Result<HuffmanTree, MakiErrors> {
        if table.is_empty() {
            return Err(MakiErrors::MalformedFrame(
                "Cannot build a tree from an empty frequency table"
            ));
        }
        let mut nodes = Vec::with_capacity(table.len() * 2 - 1);

        for (symbol, count) in table.entries() {
            nodes.push(HuffmanNode::Leaf {
                symbol: *symbol,
                weight: u64::from(*count)
            });
        }
        // indices of the nodes that have no parent yet
        let mut working: Vec<usize> = (0..nodes.len()).collect();

        while working.len() > 1 {
            let first = lowest_weight(&nodes, &working, None);
            let second = lowest_weight(&nodes, &working, Some(first));

            let left = working[first];
            let right = working[second];

            let weight = nodes[left].weight() + nodes[right].weight();

            // remove the later position first so the earlier one stays valid
            working.remove(first.max(second));
            working.remove(first.min(second));

            working.push(nodes.len());
            nodes.push(HuffmanNode::Internal {
                left,
                right,
                weight
            });
        }
        Ok(HuffmanTree { nodes })
    }
    /// Index of the root node
    pub fn root(&self) -> usize {
        self.nodes.len() - 1
    }
    /// Return the node stored at `index`
    pub fn node(&self, index: usize) -> Option<&HuffmanNode> {
        self.nodes.get(index)
    }
    /// All nodes, leaves first, root last
    pub fn nodes(&self) -> &[HuffmanNode] {
        &self.nodes
    }
    /// Derive the bit sequence of every symbol in the tree
    ///
    /// Going left appends a `0` bit, going right a `1`, first bit
    /// is the one closest to the root. A tree that is a single leaf
    /// gives that symbol an empty code.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = CodeTable::new();
        // (node, path from root to node)
        let mut stack = vec![(self.root(), Vec::new())];

        while let Some((index, path)) = stack.pop() {
            match self.nodes[index] {
                HuffmanNode::Leaf { symbol, .. } => {
                    codes.codes[usize::from(symbol)] = Some(path);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left, left_path));
                }
            }
        }
        codes
    }
}

/// Position in `working` of the node with the strictly smallest
/// weight, skipping the position `exclude`
///
/// Earlier positions win ties.
fn lowest_weight(nodes: &[HuffmanNode], working: &[usize], exclude: Option<usize>) -> usize {
    let mut best: Option<(usize, u64)> = None;

    for (position, node) in working.iter().enumerate() {
        if Some(position) == exclude {
            continue;
        }
        let weight = nodes[*node].weight();

        match best {
            Some((_, best_weight)) if weight >= best_weight => {}
            _ => best = Some((position, weight))
        }
    }
    // callers only ask when there are at least two candidates
    best.map_or(0, |(position, _)| position)
}

/// Bit sequences for each byte value
///
/// Symbols absent from the tree have no code.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Vec<bool>>>
}

impl CodeTable {
    fn new() -> CodeTable {
        CodeTable {
            codes: vec![None; MAX_SYMBOLS]
        }
    }
    /// Return the code for `symbol`, `None` if the symbol
    /// was not in the table the tree was built from
    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes[usize::from(symbol)].as_deref()
    }
}
