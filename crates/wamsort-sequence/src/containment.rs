//! Containment resolver
//!
//! Works out which cuts lie inside which by comparing every pair of
//! bounding boxes. Each cut's child list is flat: it names every cut whose
//! box the cut's box encloses, directly or through an intermediate cut, in
//! input order.

use wamsort_core::BoundingBox;

#[derive(Debug, Clone, Default)]
struct Node {
    children: Vec<usize>,
    ancestors: Vec<usize>,
    parent: Option<usize>,
}

/// Immutable nesting relation over a list of cuts, addressed by index
#[derive(Debug, Clone, Default)]
pub struct ContainmentForest {
    nodes: Vec<Node>,
}

impl ContainmentForest {
    /// Compare all pairs of boxes
    ///
    /// Enclosure is inclusive (shared edges count), but a cut never encloses
    /// itself or a cut with an identical box.
    pub fn resolve(boxes: &[BoundingBox]) -> Self {
        let mut nodes = vec![Node::default(); boxes.len()];

        for (a, outer) in boxes.iter().enumerate() {
            for (b, inner) in boxes.iter().enumerate() {
                if a != b && outer != inner && outer.encloses(inner) {
                    tracing::debug!(container = a, nested = b, "Containment edge");
                    nodes[a].children.push(b);
                    nodes[b].ancestors.push(a);
                }
            }
        }

        // Nearest enclosing cut: the smallest box among the ancestors
        for node in &mut nodes {
            node.parent = node
                .ancestors
                .iter()
                .copied()
                .min_by(|&a, &b| boxes[a].area().total_cmp(&boxes[b].area()));
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every cut enclosed by `index`, in input order
    pub fn children(&self, index: usize) -> &[usize] {
        &self.nodes[index].children
    }

    /// Every cut enclosing `index`, in input order
    pub fn ancestors(&self, index: usize) -> &[usize] {
        &self.nodes[index].ancestors
    }

    /// The nearest (smallest) cut enclosing `index`
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.nodes[index].parent
    }

    pub fn is_nested(&self, index: usize) -> bool {
        !self.nodes[index].ancestors.is_empty()
    }

    /// True when the cut encloses or is enclosed by another cut
    pub fn is_used(&self, index: usize) -> bool {
        let node = &self.nodes[index];
        !node.children.is_empty() || !node.ancestors.is_empty()
    }

    /// Nesting level: 0 for a top-level cut, 1 for a cut inside it, ...
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut current = self.nodes[index].parent;
        // Parent boxes strictly grow, so the walk ends within len steps
        while let Some(parent) = current {
            depth += 1;
            if depth >= self.nodes.len() {
                break;
            }
            current = self.nodes[parent].parent;
        }
        depth
    }

    pub fn max_depth(&self) -> usize {
        (0..self.nodes.len())
            .map(|i| self.depth(i))
            .max()
            .unwrap_or(0)
    }

    /// Cuts not enclosed by any other cut, in input order
    ///
    /// These are the top-level blocks: containers and standalone cuts.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].ancestors.is_empty())
            .collect()
    }
}
