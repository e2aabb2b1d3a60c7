//! Trade line parsing.
//!
//! A line holds five whitespace-separated fields:
//! `<stock> <interval:int> <volume:int> <high:float> <low:float>`.
//! Anything after the fifth field is ignored. Prices must be finite:
//! `nan`, `inf` and `infinity` are rejected like any other bad token.

use std::str::{FromStr, SplitWhitespace};

use crate::{Field, RecordError, TradeRecord};

/// Parses one raw line into a [`TradeRecord`].
///
/// `line_number` is 1-based and only used to tag the error.
pub fn parse_record(line: &str, line_number: usize) -> Result<TradeRecord, RecordError> {
    let mut fields = Fields {
        tokens: line.split_whitespace(),
        line: line_number,
    };

    let stock = fields.next_token(Field::Stock)?.to_owned();
    let interval = fields.next_value::<i64>(Field::Interval)?;
    let volume = fields.next_value::<i64>(Field::Volume)?;
    let high = fields.next_price(Field::High)?;
    let low = fields.next_price(Field::Low)?;

    Ok(TradeRecord {
        stock,
        interval,
        volume,
        high,
        low,
    })
}

struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn next_token(&mut self, field: Field) -> Result<&'a str, RecordError> {
        self.tokens.next().ok_or(RecordError::MissingField {
            line: self.line,
            field,
        })
    }

    fn next_value<T: FromStr>(&mut self, field: Field) -> Result<T, RecordError> {
        let token = self.next_token(field)?;
        token.parse().map_err(|_| RecordError::InvalidField {
            line: self.line,
            field,
            value: token.to_owned(),
        })
    }

    fn next_price(&mut self, field: Field) -> Result<f64, RecordError> {
        let token = self.next_token(field)?;
        match token.parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(price),
            _ => Err(RecordError::InvalidField {
                line: self.line,
                field,
                value: token.to_owned(),
            }),
        }
    }
}
