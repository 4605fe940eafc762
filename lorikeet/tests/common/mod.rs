//! Shared fixtures: one minimal accepting edit per family, all built in a
//! single arena.

#![allow(dead_code)]

use lorikeet::syntax::{Node, NodeId, SyntaxTree};
use lorikeet::{
    Access, BinaryOperator, Branch, ConstantSite, Enclosing, Family, GuardedUsage, Literal,
    Operation, Rule, Side, UnaryOperator,
};

/// A minimal operation sequence that one family accepts on its last operation.
pub struct Case {
    pub family: Family,
    pub ops: Vec<Operation<NodeId>>,
    pub rule: Rule,
}

impl Case {
    pub fn resolve<'t>(&self, tree: &'t SyntaxTree) -> Vec<Operation<Node<'t>>> {
        resolve(tree, &self.ops)
    }
}

pub fn resolve<'t>(tree: &'t SyntaxTree, ops: &[Operation<NodeId>]) -> Vec<Operation<Node<'t>>> {
    ops.iter().map(|op| op.map(|id| tree.node(id))).collect()
}

fn s(value: &str) -> String {
    value.to_string()
}

/// `return <before>` and `return <after>`, with the two returns matched.
fn returns(tree: &mut SyntaxTree, before: NodeId, after: NodeId) {
    let a = tree.ret(Some(before));
    let b = tree.ret(Some(after));
    tree.link(a, b);
}

pub fn accessor_swap(tree: &mut SyntaxTree) -> Case {
    let this = tree.expression("this", Some("Point"), &[]);
    let x = tree.field_of(this, "x", "int");
    let get_x = tree.call("getX", "int", None, &[]);
    returns(tree, x, get_x);
    Case {
        family: Family::AccessorSwap,
        ops: vec![Operation::Delete(x), Operation::Insert(get_x)],
        rule: Rule::FieldToMethod {
            field: s("x"),
            method: s("getX"),
        },
    }
}

pub fn constantification(tree: &mut SyntaxTree) -> Case {
    let size = tree.call("size", "int", None, &[]);
    let before = tree.statement("use", &[size]);
    let zero = tree.literal(Literal::Int(0));
    let after = tree.statement("use", &[zero]);
    tree.link(before, after);
    Case {
        family: Family::Constantification,
        ops: vec![Operation::Delete(size), Operation::Insert(zero)],
        rule: Rule::Constantified {
            site: ConstantSite::MethodCall,
            value: s("0"),
        },
    }
}

pub fn binary_decomposition(tree: &mut SyntaxTree) -> Case {
    let a = tree.local("a", "int");
    let b = tree.local("b", "int");
    let sum = tree.binary(BinaryOperator::Add, a, b);
    let b_after = tree.local("b", "int");
    returns(tree, sum, b_after);
    Case {
        family: Family::BinaryDecomposition,
        ops: vec![Operation::Delete(sum), Operation::moved(b, b_after)],
        rule: Rule::BinaryOperatorDecomposed {
            operator: BinaryOperator::Add,
            survivor: Side::Right,
        },
    }
}

pub fn call_decomposition(tree: &mut SyntaxTree) -> Case {
    let x = tree.local("x", "String");
    let trim = tree.call("trim", "String", None, &[x]);
    let x_after = tree.local("x", "String");
    returns(tree, trim, x_after);
    Case {
        family: Family::CallDecomposition,
        ops: vec![Operation::Delete(trim), Operation::moved(x, x_after)],
        rule: Rule::CallDecomposed { callee: s("trim") },
    }
}

pub fn field_local_swap(tree: &mut SyntaxTree) -> Case {
    let cache = tree.field("cache", "Map");
    let map = tree.local("map", "Map");
    returns(tree, cache, map);
    Case {
        family: Family::FieldLocalSwap,
        ops: vec![Operation::Delete(cache), Operation::Insert(map)],
        rule: Rule::VariableDemoted {
            access: Access::Read,
            field: s("cache"),
            local: s("map"),
        },
    }
}

pub fn null_guard(tree: &mut SyntaxTree) -> Case {
    let obj = tree.local("obj", "Point");
    let x = tree.field_of(obj, "x", "int");
    tree.ret(Some(x));
    let checked = tree.local("obj", "Point");
    let nil = tree.literal(Literal::Null);
    let check = tree.binary(BinaryOperator::Eq, checked, nil);
    let zero = tree.literal(Literal::Int(0));
    let obj_after = tree.local("obj", "Point");
    let x_after = tree.field_of(obj_after, "x", "int");
    let guard = tree.ternary(check, zero, x_after);
    tree.ret(Some(guard));
    Case {
        family: Family::NullGuard,
        ops: vec![Operation::Insert(guard), Operation::moved(x, x_after)],
        rule: Rule::NullGuardIntroduced {
            branch: Branch::Else,
            usage: GuardedUsage::FieldAccess,
            target: s("x"),
        },
    }
}

pub fn if_short_circuit(tree: &mut SyntaxTree) -> Case {
    let c = tree.local("c", "boolean");
    let s1 = tree.statement("s1", &[]);
    let s2 = tree.statement("s2", &[]);
    let body = tree.block(&[s1, s2]);
    let iff = tree.if_stmt(c, Some(body), None);
    tree.block(&[iff]);
    let s1_after = tree.statement("s1", &[]);
    let s2_after = tree.statement("s2", &[]);
    tree.block(&[s1_after, s2_after]);
    Case {
        family: Family::IfShortCircuit,
        ops: vec![
            Operation::Delete(iff),
            Operation::moved(s1, s1_after),
            Operation::moved(s2, s2_after),
        ],
        rule: Rule::IfRemoved,
    }
}

pub fn inc_dec_removal(tree: &mut SyntaxTree) -> Case {
    let i = tree.local("i", "int");
    let inc = tree.unary(UnaryOperator::PostInc, i);
    let before = tree.statement("call", &[inc]);
    let i_after = tree.local("i", "int");
    let after = tree.statement("call", &[i_after]);
    tree.link(before, after);
    Case {
        family: Family::IncDecRemoval,
        ops: vec![Operation::Delete(inc), Operation::Insert(i_after)],
        rule: Rule::IncrementRemoved,
    }
}

pub fn local_method_swap(tree: &mut SyntaxTree) -> Case {
    let n = tree.local("n", "int");
    tree.ret(Some(n));
    let n_after = tree.local("n", "int");
    let abs = tree.call("abs", "int", None, &[n_after]);
    tree.ret(Some(abs));
    Case {
        family: Family::LocalMethodSwap,
        ops: vec![Operation::moved(n, n_after), Operation::Insert(abs)],
        rule: Rule::LocalToMethod {
            local: s("n"),
            method: s("abs"),
        },
    }
}

pub fn negate_conditional(tree: &mut SyntaxTree) -> Case {
    let done = tree.local("done", "boolean");
    let body = tree.block(&[]);
    let before = tree.if_stmt(done, Some(body), None);
    let done_after = tree.local("done", "boolean");
    let not = tree.unary(UnaryOperator::Not, done_after);
    let body_after = tree.block(&[]);
    let after = tree.if_stmt(not, Some(body_after), None);
    tree.link(before, after);
    Case {
        family: Family::NegateConditional,
        ops: vec![Operation::Insert(not), Operation::moved(done, done_after)],
        rule: Rule::ConditionalTestNegated {
            enclosing: Enclosing::If,
        },
    }
}

pub fn negate_int(tree: &mut SyntaxTree) -> Case {
    let five = tree.literal(Literal::Int(5));
    let neg = tree.unary(UnaryOperator::Neg, five);
    let folded = tree.literal(Literal::Int(-5));
    returns(tree, neg, folded);
    Case {
        family: Family::NegateInt,
        ops: vec![Operation::Delete(neg), Operation::Insert(folded)],
        rule: Rule::ConstantReplaced { value: s("-5") },
    }
}

pub fn call_guard(tree: &mut SyntaxTree) -> Case {
    let listener = tree.local("listener", "Listener");
    let fire = tree.call("fire", "void", Some(listener), &[]);
    let stmt = tree.statement("expr", &[fire]);
    tree.block(&[stmt]);
    let checked = tree.local("listener", "Listener");
    let nil = tree.literal(Literal::Null);
    let check = tree.binary(BinaryOperator::Ne, checked, nil);
    let listener_after = tree.local("listener", "Listener");
    let fire_after = tree.call("fire", "void", Some(listener_after), &[]);
    let stmt_after = tree.statement("expr", &[fire_after]);
    let body = tree.block(&[stmt_after]);
    let guard = tree.if_stmt(check, Some(body), None);
    tree.block(&[guard]);
    Case {
        family: Family::CallGuard,
        ops: vec![Operation::Insert(guard), Operation::moved(fire, fire_after)],
        rule: Rule::GuardedCallIntroduced {
            receiver: s("listener"),
            method: s("fire"),
        },
    }
}

pub fn operator_function_swap(tree: &mut SyntaxTree) -> Case {
    let a = tree.local("a", "BigDecimal");
    let b = tree.local("b", "BigDecimal");
    let sum = tree.binary(BinaryOperator::Add, a, b);
    let a_after = tree.local("a", "BigDecimal");
    let b_after = tree.local("b", "BigDecimal");
    let add = tree.call("add", "BigDecimal", Some(a_after), &[b_after]);
    returns(tree, sum, add);
    Case {
        family: Family::OperatorFunctionSwap,
        ops: vec![Operation::Delete(sum), Operation::Insert(add)],
        rule: Rule::OperatorToFunction {
            operator: s("+"),
            function: s("add"),
        },
    }
}

pub fn operator_replacement(tree: &mut SyntaxTree) -> Case {
    let a = tree.local("a", "int");
    let b = tree.local("b", "int");
    let lt = tree.binary(BinaryOperator::Lt, a, b);
    let a_after = tree.local("a", "int");
    let b_after = tree.local("b", "int");
    let le = tree.binary(BinaryOperator::Le, a_after, b_after);
    returns(tree, lt, le);
    Case {
        family: Family::OperatorReplacement,
        ops: vec![Operation::updated(lt, le)],
        rule: Rule::OperatorReplaced {
            from: BinaryOperator::Lt,
            to: BinaryOperator::Le,
        },
    }
}

/// One case per family, in [`Family::ALL`] order.
pub fn all_cases(tree: &mut SyntaxTree) -> Vec<Case> {
    vec![
        accessor_swap(tree),
        constantification(tree),
        binary_decomposition(tree),
        call_decomposition(tree),
        field_local_swap(tree),
        null_guard(tree),
        if_short_circuit(tree),
        inc_dec_removal(tree),
        local_method_swap(tree),
        negate_conditional(tree),
        negate_int(tree),
        call_guard(tree),
        operator_function_swap(tree),
        operator_replacement(tree),
    ]
}

/// An in-place update of a plain statement: nothing starts on it and every
/// partial match abandons on it.
pub fn separator(tree: &mut SyntaxTree) -> Operation<NodeId> {
    let before = tree.statement("sep", &[]);
    let after = tree.statement("sep2", &[]);
    Operation::updated(before, after)
}

/// Every case, separated so no partial match leaks into the next case.
pub fn combined_stream(tree: &mut SyntaxTree) -> (Vec<Case>, Vec<Operation<NodeId>>) {
    let cases = all_cases(tree);
    let mut stream = Vec::new();
    for case in &cases {
        stream.extend(case.ops.iter().copied());
        stream.push(separator(tree));
    }
    (cases, stream)
}
