// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur (f64)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile
//
// Règles:
// - Précédence : moins unaire > * / > + -
// - Binaires associatifs à gauche
// - Moins/plus unaire : si l’opérateur arrive quand on n’attend PAS d’opérateur
//   ("-3", "2*(-3)"). Le plus unaire est simplement ignoré.
// - Multiplication implicite : une valeur fermée suivie d’un nombre ou de '('
//   => "2(3)" vaut "2*(3)", "(2)(3)" vaut "(2)*(3)"

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg, // moins unaire (préfixe)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Num(f64),
    Op(Op),
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Op),
    LPar,
}

fn precedence(op: Op) -> i32 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
        Op::Neg => 3,
    }
}

/// Binaire (gauche) : dépile tant que le sommet lie au moins aussi fort.
fn pousser_binaire(op: Op, out: &mut Vec<Rpn>, ops: &mut Vec<Pile>) {
    while let Some(Pile::Op(top)) = ops.last() {
        let top = *top;
        if precedence(top) < precedence(op) {
            break;
        }
        out.push(Rpn::Op(top));
        ops.pop();
    }
    ops.push(Pile::Op(op));
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Num(1), Plus, Num(3), RPar]
///   rpn:    [2, 1, 3, Add, Mul]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    let mut out: Vec<Rpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire et la multiplication implicite.
    let mut prev_was_value = false;

    for tok in tokens {
        match tok {
            Tok::Num(v) => {
                if prev_was_value {
                    pousser_binaire(Op::Mul, &mut out, &mut ops);
                }
                out.push(Rpn::Num(*v));
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    pousser_binaire(Op::Mul, &mut out, &mut ops);
                }
                ops.push(Pile::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                // "()" ou "(1+)" : rien à fermer
                if !prev_was_value {
                    return Err(ErreurCalcul::ParentheseInattendue);
                }
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(Pile::Op(op)) => out.push(Rpn::Op(op)),
                        None => return Err(ErreurCalcul::ParentheseInattendue),
                    }
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus => {
                if prev_was_value {
                    let op = if matches!(tok, Tok::Plus) {
                        Op::Add
                    } else {
                        Op::Sub
                    };
                    pousser_binaire(op, &mut out, &mut ops);
                } else if matches!(tok, Tok::Minus) {
                    // préfixe : rien à dépiler
                    ops.push(Pile::Op(Op::Neg));
                }
                prev_was_value = false;
            }

            Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurCalcul::OperandeManquant);
                }
                let op = if matches!(tok, Tok::Star) {
                    Op::Mul
                } else {
                    Op::Div
                };
                pousser_binaire(op, &mut out, &mut ops);
                prev_was_value = false;
            }
        }
    }

    // opérateur pendant en fin d’expression ("3+")
    if !prev_was_value {
        return Err(ErreurCalcul::OperandeManquant);
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::LPar => return Err(ErreurCalcul::ParenthesesNonFermees),
            Pile::Op(op) => out.push(Rpn::Op(op)),
        }
    }

    Ok(out)
}

/// Évalue une RPN (arithmétique flottante IEEE-754).
/// Division par une valeur nulle calculée : ±Infinity / NaN, pas d’erreur.
pub fn eval_rpn(rpn: &[Rpn]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for r in rpn {
        match r {
            Rpn::Num(v) => st.push(*v),

            Rpn::Op(Op::Neg) => {
                let x = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                st.push(-x);
            }

            Rpn::Op(op) => {
                let b = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                let v = match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div => a / b,
                    Op::Neg => unreachable!(),
                };
                st.push(v);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}
