use nom::IResult;
use nom_language::error::VerboseError;

use crate::cst::Input;

pub type ParseResult<'a, O> = IResult<Input<'a>, O, VerboseError<Input<'a>>>;
