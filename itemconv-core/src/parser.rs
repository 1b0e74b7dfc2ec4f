use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, one_of},
    combinator::{map_res, opt, recognize},
    multi::{many0, many1},
    sequence::{preceded, terminated},
    IResult,
};

use crate::{FormatVersion, ItemCode};

fn digits<'a>(radix_digits: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(many1(terminated(one_of(radix_digits), many0(char('_')))))
}

fn decimal(input: &str) -> IResult<&str, u32> {
    map_res(digits("0123456789"), |out: &str| {
        u32::from_str_radix(&str::replace(out, "_", ""), 10)
    })(input)
}

fn hexadecimal(input: &str) -> IResult<&str, u32> {
    map_res(
        preceded(
            alt((tag("0x"), tag("0X"), tag("$"))),
            digits("0123456789abcdefABCDEF"),
        ),
        |out: &str| u32::from_str_radix(&str::replace(out, "_", ""), 16),
    )(input)
}

pub fn item_code(input: &str) -> IResult<&str, ItemCode> {
    let (input, value) = alt((hexadecimal, decimal))(input)?;

    Ok((input, ItemCode(value)))
}

pub fn format_version(input: &str) -> IResult<&str, FormatVersion> {
    let (input, _) = opt(alt((tag_no_case("gen"), tag_no_case("g"))))(input)?;
    let (input, version) = map_res(decimal, |v| u8::try_from(v))(input)?;

    Ok((input, FormatVersion(version)))
}
