/**
 * Classification on the Chomsky hierarchy.
 */

use std::fmt::{self, Display};
use crate::grammar::Grammar;
use crate::symbol::{self, Phrase, Symbol};

/// The four grammar classes, ordered from the most restrictive to the least
/// restrictive one: Type 3 ⊂ Type 2 ⊂ Type 1 ⊂ Type 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChomskyType {
    Regular,
    ContextFree,
    ContextSensitive,
    Unrestricted,
}

impl ChomskyType {
    /// The number of the class in the hierarchy, 3 for regular down to 0.
    pub fn number(self) -> u8 {
        match self {
            ChomskyType::Regular => 3,
            ChomskyType::ContextFree => 2,
            ChomskyType::ContextSensitive => 1,
            ChomskyType::Unrestricted => 0,
        }
    }

    /// True if every grammar of class `other` is also in this class.
    pub fn includes(self, other: ChomskyType) -> bool {
        self >= other
    }
}

impl Display for ChomskyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChomskyType::Regular => "regular",
            ChomskyType::ContextFree => "context-free",
            ChomskyType::ContextSensitive => "context-sensitive",
            ChomskyType::Unrestricted => "unrestricted",
        };
        write!(f, "Type {} ({})", self.number(), name)
    }
}

/// The shape of a single production with respect to the regular class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegularForm {
    /// `A → a B`
    RightLinear,
    /// `A → B a`
    LeftLinear,
    /// `A → a`, `A → ε`, or `S → ` for the start symbol
    Terminating,
    Irregular,
}

impl RegularForm {
    pub fn is_regular(self) -> bool {
        self != RegularForm::Irregular
    }
}

impl Display for RegularForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegularForm::RightLinear => "right-linear",
            RegularForm::LeftLinear => "left-linear",
            RegularForm::Terminating => "terminating",
            RegularForm::Irregular => "irregular",
        })
    }
}

/// The linearity direction shared by the linear productions of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linearity {
    /// No linear production at all
    Undetermined,
    Right,
    Left,
    /// Both right- and left-linear productions are present
    Mixed,
}

impl Display for Linearity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Linearity::Undetermined => "no linear productions",
            Linearity::Right => "right-linear",
            Linearity::Left => "left-linear",
            Linearity::Mixed => "mixed linearity",
        })
    }
}

impl Linearity {
    fn with(self, form: RegularForm) -> Self {
        match (self, form) {
            (Linearity::Undetermined, RegularForm::RightLinear) => Linearity::Right,
            (Linearity::Undetermined, RegularForm::LeftLinear) => Linearity::Left,
            (Linearity::Right, RegularForm::LeftLinear)
            | (Linearity::Left, RegularForm::RightLinear) => Linearity::Mixed,
            (current, _) => current,
        }
    }
}

/// The verdicts for one `left → right` alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionReport<T> {
    pub left: Phrase<T>,
    pub right: Phrase<T>,
    pub regular_form: RegularForm,
    pub context_free: bool,
    pub non_contracting: bool,
}

impl <T> ProductionReport<T> {
    /// Whether this production alone fits the given class. Linearity of the
    /// whole grammar is not taken into account here.
    pub fn fits(&self, kind: ChomskyType) -> bool {
        match kind {
            ChomskyType::Regular => self.regular_form.is_regular(),
            ChomskyType::ContextFree => self.context_free,
            ChomskyType::ContextSensitive => self.non_contracting,
            ChomskyType::Unrestricted => true,
        }
    }
}

/// Renders as `A → a B (right-linear, context-free, non-contracting)`.
impl <T> Display for ProductionReport<T> where T : Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        symbol::fmt_phrase(f, &self.left)?;
        write!(f, " →")?;
        if !self.right.is_empty() {
            write!(f, " ")?;
            symbol::fmt_phrase(f, &self.right)?;
        }
        write!(f, " ({}, {}context-free, {}non-contracting)",
            self.regular_form,
            if self.context_free { "" } else { "not " },
            if self.non_contracting { "" } else { "not " })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<T> {
    pub kind: ChomskyType,
    pub linearity: Linearity,
    pub productions: Vec<ProductionReport<T>>,
}

impl <T> Classification<T> {
    /// The productions keeping the grammar out of `kind`.
    pub fn offenders(&self, kind: ChomskyType) -> impl Iterator<Item = &ProductionReport<T>> + '_ {
        self.productions.iter().filter(move |report| !report.fits(kind))
    }
}

impl <T> Display for Classification<T> where T : Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.kind, self.linearity)?;
        for report in &self.productions {
            writeln!(f, "  {}", report)?;
        }
        Ok(())
    }
}

impl <T> Grammar<T> where T : Clone + Ord {
    /// The most restrictive class every production of the grammar fits.
    pub fn classify(&self) -> ChomskyType {
        self.classification().kind
    }

    pub fn classification(&self) -> Classification<T> {
        let mut linearity = Linearity::Undetermined;
        let mut productions = Vec::new();

        for (left, right) in self.rules() {
            let regular_form = self.regular_form(left, right);
            linearity = linearity.with(regular_form);
            productions.push(ProductionReport{
                left: left.clone(),
                right: right.clone(),
                regular_form,
                context_free: self.is_context_free(left, right),
                non_contracting: self.is_non_contracting(left, right),
            });
        }

        let all = |kind| productions.iter().all(|report: &ProductionReport<T>| report.fits(kind));
        let kind = if all(ChomskyType::Regular) && linearity != Linearity::Mixed {
            ChomskyType::Regular
        }
        else if all(ChomskyType::ContextFree) {
            ChomskyType::ContextFree
        }
        else if all(ChomskyType::ContextSensitive) {
            ChomskyType::ContextSensitive
        }
        else {
            ChomskyType::Unrestricted
        };

        Classification{ kind, linearity, productions }
    }

    // Longer left sides are never regular, so Type 3 stays inside Type 2.
    fn regular_form(&self, left: &[Symbol<T>], right: &[Symbol<T>]) -> RegularForm {
        if !is_single_nonterminal(left) {
            return RegularForm::Irregular;
        }
        match right {
            [] if self.is_start(left) => RegularForm::Terminating,
            [Symbol::Epsilon] | [Symbol::Terminal(_)] => RegularForm::Terminating,
            [Symbol::Terminal(_), Symbol::Nonterminal(_)] => RegularForm::RightLinear,
            [Symbol::Nonterminal(_), Symbol::Terminal(_)] => RegularForm::LeftLinear,
            _ => RegularForm::Irregular,
        }
    }

    fn is_context_free(&self, left: &[Symbol<T>], right: &[Symbol<T>]) -> bool {
        is_single_nonterminal(left) && (!right.is_empty() || self.is_start(left))
    }

    fn is_non_contracting(&self, left: &[Symbol<T>], right: &[Symbol<T>]) -> bool {
        if right.is_empty() {
            self.is_start(left)
        }
        else {
            right.len() >= left.len()
        }
    }
}

fn is_single_nonterminal<T>(phrase: &[Symbol<T>]) -> bool {
    match phrase {
        [Symbol::Nonterminal(_)] => true,
        _ => false,
    }
}
