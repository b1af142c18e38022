use crate::primitive::Symbol;


/// Forms whose operands reach the executor unevaluated.
///
/// Recognized by name ahead of any environment lookup, so rebinding one of
/// these names does not change how a combination headed by it behaves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialForm {
    Quote,
    If,
    Define,
    Set,
    Lambda,
    SetCar,
    SetCdr,
    And,
    Or,
}

impl SpecialForm {
    pub const ALL: [SpecialForm; 9] = [
        SpecialForm::Quote,
        SpecialForm::If,
        SpecialForm::Define,
        SpecialForm::Set,
        SpecialForm::Lambda,
        SpecialForm::SetCar,
        SpecialForm::SetCdr,
        SpecialForm::And,
        SpecialForm::Or,
    ];

    pub fn from_symbol(symbol: &Symbol) -> Option<Self> {
        match symbol.as_str() {
            "quote" => Some(SpecialForm::Quote),
            "if" => Some(SpecialForm::If),
            "define" => Some(SpecialForm::Define),
            "set!" => Some(SpecialForm::Set),
            "lambda" => Some(SpecialForm::Lambda),
            "set-car!" => Some(SpecialForm::SetCar),
            "set-cdr!" => Some(SpecialForm::SetCdr),
            "and" => Some(SpecialForm::And),
            "or" => Some(SpecialForm::Or),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialForm::Quote => "quote",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Set => "set!",
            SpecialForm::Lambda => "lambda",
            SpecialForm::SetCar => "set-car!",
            SpecialForm::SetCdr => "set-cdr!",
            SpecialForm::And => "and",
            SpecialForm::Or => "or",
        }
    }
}
