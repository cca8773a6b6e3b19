//! The module layout grammar and its matcher.
//!
//! The legal ordering of a module's instructions is a regular language over
//! opcodes. Character-class regex engines are the wrong substrate here (some
//! opcode values collide with metacharacter code points), so the pattern is
//! built as a small AST and compiled once into a Thompson NFA over `u16`
//! opcode symbols with a wildcard.

use std::sync::OnceLock;

use spv_asm::Opcode;

pub(crate) enum Pat {
    /// One specific opcode.
    Sym(Opcode),
    /// Any single opcode.
    Any,
    Seq(Vec<Pat>),
    OneOf(Vec<Pat>),
    Opt(Box<Pat>),
    Star(Box<Pat>),
    Plus(Box<Pat>),
}

fn sym(opcode: Opcode) -> Pat {
    Pat::Sym(opcode)
}

fn opt(pat: Pat) -> Pat {
    Pat::Opt(Box::new(pat))
}

fn star(pat: Pat) -> Pat {
    Pat::Star(Box::new(pat))
}

fn plus(pat: Pat) -> Pat {
    Pat::Plus(Box::new(pat))
}

/// The order instructions must appear in within a valid module.
fn layout_pattern() -> Pat {
    use Opcode::*;

    let debug_section = vec![
        opt(sym(Source)),
        star(sym(SourceExtension)),
        star(sym(CompileFlag)),
        star(sym(Extension)),
        star(sym(ExtInstImport)),
    ];

    let annotation_section = star(Pat::OneOf(vec![
        sym(Decorate),
        sym(MemberDecorate),
        sym(GroupDecorate),
        sym(GroupMemberDecorate),
        sym(DecorationGroup),
    ]));

    // Types, constants, and module-level variables interleave freely.
    let declaration_section = star(Pat::OneOf(vec![
        sym(TypeVoid),
        sym(TypeBool),
        sym(TypeInt),
        sym(TypeFloat),
        sym(TypeVector),
        sym(TypeMatrix),
        sym(TypeSampler),
        sym(TypeFilter),
        sym(TypeArray),
        sym(TypeRuntimeArray),
        sym(TypeStruct),
        sym(TypeOpaque),
        sym(TypePointer),
        sym(TypeFunction),
        sym(TypeEvent),
        sym(TypeDeviceEvent),
        sym(TypeReserveId),
        sym(TypeQueue),
        sym(TypePipe),
        sym(ConstantTrue),
        sym(ConstantFalse),
        sym(Constant),
        sym(ConstantComposite),
        sym(ConstantSampler),
        sym(ConstantNullPointer),
        sym(ConstantNullObject),
        sym(SpecConstantTrue),
        sym(SpecConstantFalse),
        sym(SpecConstant),
        sym(SpecConstantComposite),
        sym(Variable),
    ]));

    let block = Pat::Seq(vec![sym(Label), star(Pat::Any), sym(Branch)]);
    let function = Pat::Seq(vec![
        sym(Function),
        star(sym(FunctionParameter)),
        plus(block),
        sym(FunctionEnd),
    ]);

    let mut sections = debug_section;
    sections.extend([
        sym(MemoryModel),
        star(sym(EntryPoint)),
        plus(sym(ExecutionMode)),
        star(sym(DebugString)),
        star(sym(Name)),
        star(sym(MemberName)),
        star(sym(Line)),
        annotation_section,
        declaration_section,
        plus(function),
    ]);

    Pat::Seq(sections)
}

enum Edge {
    Epsilon(usize),
    Symbol(Match, usize),
}

#[derive(Clone, Copy)]
enum Match {
    Op(u16),
    Any,
}

impl Match {
    fn accepts(self, symbol: u16) -> bool {
        match self {
            Self::Op(op) => op == symbol,
            Self::Any => true,
        }
    }
}

pub(crate) struct Nfa {
    states: Vec<Vec<Edge>>,
    start: usize,
    accept: usize,
}

impl Nfa {
    fn compile(pattern: &Pat) -> Self {
        let mut nfa = Self { states: Vec::new(), start: 0, accept: 0 };
        let (start, accept) = nfa.fragment(pattern);
        nfa.start = start;
        nfa.accept = accept;
        nfa
    }

    fn state(&mut self) -> usize {
        self.states.push(Vec::new());
        self.states.len() - 1
    }

    fn epsilon(&mut self, from: usize, to: usize) {
        self.states[from].push(Edge::Epsilon(to));
    }

    fn fragment(&mut self, pattern: &Pat) -> (usize, usize) {
        match pattern {
            Pat::Sym(opcode) => {
                let start = self.state();
                let accept = self.state();
                self.states[start].push(Edge::Symbol(Match::Op(*opcode as u16), accept));
                (start, accept)
            }
            Pat::Any => {
                let start = self.state();
                let accept = self.state();
                self.states[start].push(Edge::Symbol(Match::Any, accept));
                (start, accept)
            }
            Pat::Seq(parts) => {
                let start = self.state();
                let mut tail = start;
                for part in parts {
                    let (s, a) = self.fragment(part);
                    self.epsilon(tail, s);
                    tail = a;
                }
                (start, tail)
            }
            Pat::OneOf(alternatives) => {
                let start = self.state();
                let accept = self.state();
                for alternative in alternatives {
                    let (s, a) = self.fragment(alternative);
                    self.epsilon(start, s);
                    self.epsilon(a, accept);
                }
                (start, accept)
            }
            Pat::Opt(inner) => {
                let (s, a) = self.fragment(inner);
                let start = self.state();
                let accept = self.state();
                self.epsilon(start, s);
                self.epsilon(a, accept);
                self.epsilon(start, accept);
                (start, accept)
            }
            Pat::Star(inner) => {
                let (s, a) = self.fragment(inner);
                let start = self.state();
                let accept = self.state();
                self.epsilon(start, s);
                self.epsilon(a, s);
                self.epsilon(a, accept);
                self.epsilon(start, accept);
                (start, accept)
            }
            Pat::Plus(inner) => {
                let (s, a) = self.fragment(inner);
                let accept = self.state();
                self.epsilon(a, s);
                self.epsilon(a, accept);
                (s, accept)
            }
        }
    }

    fn closure(&self, set: &mut Vec<bool>) {
        let mut stack: Vec<usize> = set
            .iter()
            .enumerate()
            .filter(|(_, &active)| active)
            .map(|(state, _)| state)
            .collect();

        while let Some(state) = stack.pop() {
            for edge in &self.states[state] {
                if let Edge::Epsilon(to) = edge {
                    if !set[*to] {
                        set[*to] = true;
                        stack.push(*to);
                    }
                }
            }
        }
    }

    /// Matches the whole symbol sequence.
    ///
    /// On failure, yields the index of the first symbol no rule could
    /// accept, or the sequence length when the input is a proper prefix of
    /// the language.
    pub(crate) fn matches(&self, symbols: impl Iterator<Item = u16>) -> Result<(), usize> {
        let mut current = vec![false; self.states.len()];
        current[self.start] = true;
        self.closure(&mut current);

        let mut consumed = 0;
        for (position, symbol) in symbols.enumerate() {
            let mut next = vec![false; self.states.len()];
            let mut alive = false;

            for (state, &active) in current.iter().enumerate() {
                if !active {
                    continue;
                }
                for edge in &self.states[state] {
                    if let Edge::Symbol(matcher, to) = edge {
                        if matcher.accepts(symbol) {
                            next[*to] = true;
                            alive = true;
                        }
                    }
                }
            }

            if !alive {
                return Err(position);
            }

            self.closure(&mut next);
            current = next;
            consumed = position + 1;
        }

        if current[self.accept] {
            Ok(())
        } else {
            // The input is a proper prefix of the language.
            Err(consumed)
        }
    }
}

/// The compiled layout automaton, built on first use.
pub(crate) fn layout_nfa() -> &'static Nfa {
    static NFA: OnceLock<Nfa> = OnceLock::new();
    NFA.get_or_init(|| Nfa::compile(&layout_pattern()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Opcode::*;

    fn run(opcodes: &[Opcode]) -> Result<(), usize> {
        layout_nfa().matches(opcodes.iter().map(|&opcode| opcode as u16))
    }

    #[test]
    fn minimal_module_matches() {
        run(&[
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            Function,
            FunctionParameter,
            Label,
            IAdd,
            Branch,
            FunctionEnd,
        ])
        .unwrap();
    }

    #[test]
    fn source_must_lead_the_debug_section() {
        run(&[
            Source,
            CompileFlag,
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            Function,
            Label,
            Branch,
            FunctionEnd,
        ])
        .unwrap();

        let err = run(&[
            CompileFlag,
            Source,
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            Function,
            Label,
            Branch,
            FunctionEnd,
        ])
        .unwrap_err();
        assert_eq!(err, 1);
    }

    #[test]
    fn functions_must_be_terminated() {
        assert!(run(&[MemoryModel, EntryPoint, ExecutionMode, Function, Label, Branch]).is_err());
    }

    #[test]
    fn functions_need_at_least_one_block() {
        // A function body with no blocks at all is malformed.
        let err = run(&[
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            Function,
            FunctionEnd,
        ])
        .unwrap_err();
        assert_eq!(err, 4);
    }

    #[test]
    fn blocks_swallow_arbitrary_body_instructions() {
        run(&[
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            Function,
            Label,
            Load,
            Store,
            FunctionCall,
            ReturnValue,
            Branch,
            Label,
            Kill,
            Branch,
            FunctionEnd,
        ])
        .unwrap();
    }

    #[test]
    fn declarations_precede_functions() {
        run(&[
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            TypeVoid,
            TypeInt,
            Constant,
            Variable,
            Function,
            Label,
            Branch,
            FunctionEnd,
        ])
        .unwrap();

        // A type after the first function is out of section.
        assert!(run(&[
            MemoryModel,
            EntryPoint,
            ExecutionMode,
            Function,
            Label,
            Branch,
            FunctionEnd,
            TypeVoid,
        ])
        .is_err());
    }
}
