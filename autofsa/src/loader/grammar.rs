//! `nom` combinators for one tag of the pseudo-XML markup (§6). Each
//! function extracts its tag's content from anywhere in the input and
//! leaves the rest alone; the driver in `loader::mod` decides what to do
//! when a tag is absent or malformed.

use nom::branch::alt;
use nom::bytes::complete::{escaped_transform, is_not, tag, take_until};
use nom::character::complete::char as nom_char;
use nom::combinator::{map, value};
use nom::sequence::delimited;
use nom::IResult;

/// Locates `open` anywhere in `input` (the tags may appear in any order,
/// per §6), then reads up to the matching `close`.
fn section(open: &'static str, close: &'static str) -> impl Fn(&str) -> IResult<&str, &str> {
    move |input: &str| {
        let (after_prefix, _) = take_until(open)(input)?;
        delimited(tag(open), take_until(close), tag(close))(after_prefix)
    }
}

pub fn type_section(input: &str) -> IResult<&str, &str> {
    section("<TYPE>", "</TYPE>")(input)
}

pub fn states_section(input: &str) -> IResult<&str, &str> {
    section("<STATES>", "</STATES>")(input)
}

pub fn symbols_section(input: &str) -> IResult<&str, &str> {
    section("<SYMBOLS>", "</SYMBOLS>")(input)
}

pub fn start_state_section(input: &str) -> IResult<&str, &str> {
    section("<STARTSTATE>", "</STARTSTATE>")(input)
}

pub fn accept_states_section(input: &str) -> IResult<&str, &str> {
    section("<ACCEPTSTATES>", "</ACCEPTSTATES>")(input)
}

pub fn transition_function_section(input: &str) -> IResult<&str, &str> {
    section("<TRANSITIONFUNCTION>", "</TRANSITIONFUNCTION>")(input)
}

/// One `<T>from,symbol,to</T>` entry.
pub fn transition_entry(input: &str) -> IResult<&str, &str> {
    section("<T>", "</T>")(input)
}

/// Unescapes a `<SYMBOLS>` element: `\0` promotes to the reserved epsilon
/// byte, `\\` and `\<` escape their literal characters.
pub fn unescape_symbol(input: &str) -> IResult<&str, String> {
    alt((
        escaped_transform(
            is_not("\\"),
            '\\',
            alt((
                value("E", nom_char('0')),
                value("\\", nom_char('\\')),
                value("<", nom_char('<')),
            )),
        ),
        map(is_not(""), |s: &str| s.to_string()),
    ))(input)
}
