use crate::inst::{Inst, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Index;

/// Owner of every node of a program. Edges are plain [`NodeId`]s,
/// so loops are just ids pointing backwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, inst: Inst) -> NodeId {
        self.nodes.push(Node::new(inst));
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn set_next(&mut self, id: NodeId, next: NodeId) {
        self.nodes[id.0].next = Some(next);
    }

    /// Only jumps carry a target; callers pass CJMP or JMP nodes.
    pub fn set_target(&mut self, id: NodeId, to: NodeId) {
        let inst = &mut self.nodes[id.0].inst;
        debug_assert!(inst.is_jump(), "Not a jump: {:?}", inst);
        if let Inst::CJMP { target, .. } | Inst::JMP { target } = inst {
            *target = Some(to);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Nodes reachable from `root` in depth-first order, `next` before `target`
    pub fn reachable(&self, root: NodeId) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            if let Some(node) = self.get(id) {
                let succ: Vec<_> = node.successors().collect();
                stack.extend(succ.into_iter().rev());
            }
        }
        order
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inst::Loc;
    use crate::op::RelOp;

    #[test]
    fn reachable_follows_back_edges() {
        let mut arena = Arena::new();
        let c = arena.push(Inst::CJMP {
            lhs: Loc(0),
            relop: RelOp::LESS,
            rhs: Loc(1),
            target: None,
        });
        let j = arena.push(Inst::JMP { target: None });
        let e = arena.push(Inst::NOOP);
        let orphan = arena.push(Inst::NOOP);
        arena.set_next(c, j);
        arena.set_target(c, e);
        arena.set_target(j, c);
        arena.set_next(j, e);

        assert_eq!(arena.reachable(c), vec![c, j, e]);
        assert!(!arena.reachable(c).contains(&orphan));
        assert_eq!(arena[j].inst.target(), Some(c));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Not a jump")]
    fn target_of_noop_is_rejected() {
        let mut arena = Arena::new();
        let n = arena.push(Inst::NOOP);
        arena.set_target(n, n);
    }
}
