use std::io::BufRead;

use super::*;

macro_rules! parse_input {
    ($fields:expr, $what:expr, $t:ident) => {{
        let raw = $fields.next().ok_or(InputError::MissingField { what: $what })?;
        raw.parse::<$t>().map_err(|_| InputError::InvalidNumber {
            what: $what,
            value: raw.to_string(),
        })?
    }};
}

/// Reads turns of the referee feed:
///
/// ```text
/// x y                 hunter
/// N                   data point count
/// id x y              N times
/// M                   enemy count
/// id x y life         M times
/// ```
pub struct TurnReader<R> {
    input: R,
    input_line: String,
    iter: i32,
}

impl<R: BufRead> TurnReader<R> {
    pub fn new(input: R) -> Self {
        TurnReader {
            input,
            input_line: String::new(),
            iter: 0,
        }
    }

    /// Next line with surrounding whitespace removed, `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&str>, InputError> {
        self.input_line.clear();
        if self.input.read_line(&mut self.input_line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.input_line.trim()))
    }

    fn expect_line(&mut self, what: &'static str) -> Result<&str, InputError> {
        self.next_line()?.ok_or(InputError::UnexpectedEof { what })
    }

    fn read_count(&mut self, what: &'static str) -> Result<usize, InputError> {
        let line = self.expect_line(what)?;
        let mut fields = line.split_whitespace();
        Ok(parse_input!(fields, what, usize))
    }

    /// Reads one full turn. Returns `Ok(None)` when the feed ends cleanly
    /// before a new turn starts.
    pub fn read_turn(&mut self) -> Result<Option<World>, InputError> {
        let me = match self.next_line()? {
            None => return Ok(None),
            Some(line) => {
                let mut fields = line.split_whitespace();
                let x = parse_input!(fields, "hunter x", i32);
                let y = parse_input!(fields, "hunter y", i32);
                Vec2::new(x as f64, y as f64)
            }
        };

        let data_point_count = self.read_count("data point count")?;
        let mut data_points = Vec::with_capacity(data_point_count);
        for _ in 0..data_point_count {
            let line = self.expect_line("data point")?;
            let mut fields = line.split_whitespace();
            let id = parse_input!(fields, "data point id", i32);
            let x = parse_input!(fields, "data point x", i32);
            let y = parse_input!(fields, "data point y", i32);
            data_points.push(DataPoint::new(id, Vec2::new(x as f64, y as f64)));
        }

        let enemy_count = self.read_count("enemy count")?;
        let mut enemies = Vec::with_capacity(enemy_count);
        for _ in 0..enemy_count {
            let line = self.expect_line("enemy")?;
            let mut fields = line.split_whitespace();
            let id = parse_input!(fields, "enemy id", i32);
            let x = parse_input!(fields, "enemy x", i32);
            let y = parse_input!(fields, "enemy y", i32);
            let life = parse_input!(fields, "enemy life", i32);
            enemies.push(Enemy::new(id, Vec2::new(x as f64, y as f64), life));
        }

        self.iter += 1;
        Ok(Some(World {
            me,
            data_points,
            enemies,
            iter: self.iter,
        }))
    }
}
