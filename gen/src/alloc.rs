use ir::{Loc, Memory, Symbols};

/// Hands out memory locations for variables and literal constants.
///
/// Both tables deduplicate: the first occurrence of a name or value takes
/// the next free cell, every later occurrence gets the same location back.
/// The free counter is the length of the memory image.
#[derive(Debug, Default)]
pub struct Allocator {
    symbols: Symbols,
    memory: Memory,
}

impl Allocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_ident(&mut self, name: &str) -> Loc {
        if let Some(loc) = self.symbols.var(name) {
            return loc;
        }
        let loc = self.memory.alloc(0);
        self.symbols.vars.insert(name.to_string(), loc);
        loc
    }

    pub fn resolve_literal(&mut self, value: i32) -> Loc {
        if let Some(loc) = self.symbols.konst(value) {
            return loc;
        }
        let loc = self.memory.alloc(value);
        self.symbols.consts.insert(value, loc);
        loc
    }

    pub fn finish(self) -> (Symbols, Memory) {
        (self.symbols, self.memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idents_are_idempotent() {
        let mut alloc = Allocator::new();
        let a = alloc.resolve_ident("a");
        let b = alloc.resolve_ident("b");
        assert_eq!(alloc.resolve_ident("a"), a);
        assert_eq!(alloc.resolve_ident("b"), b);
        assert_ne!(a, b);
        assert_eq!(alloc.finish().1.len(), 2);
    }

    #[test]
    fn literals_share_the_counter() {
        let mut alloc = Allocator::new();
        assert_eq!(alloc.resolve_ident("x"), Loc(0));
        assert_eq!(alloc.resolve_literal(7), Loc(1));
        assert_eq!(alloc.resolve_ident("y"), Loc(2));
        assert_eq!(alloc.resolve_literal(7), Loc(1));
        assert_eq!(alloc.resolve_literal(0), Loc(3));
        assert_eq!(alloc.finish().1.cells(), &[0, 7, 0, 0]);
    }

    #[test]
    fn finish_hands_over_tables() {
        let mut alloc = Allocator::new();
        alloc.resolve_ident("n");
        alloc.resolve_literal(-3);
        let (symbols, memory) = alloc.finish();
        assert_eq!(symbols.var("n"), Some(Loc(0)));
        assert_eq!(symbols.konst(-3), Some(Loc(1)));
        assert_eq!(memory.get(Loc(1)), -3);
    }
}
