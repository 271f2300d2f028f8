//! Line-oriented input scripts standing in for live keyboard and mouse
//! input. One command per line, `#` starts a comment:
//!
//! ```text
//! turn-left *3     # repeat with *N
//! mouse 380 300
//! reach +2
//! place
//! wait 10          # later commands fire 10 ticks further on
//! sphere
//! ```

use thiserror::Error;

use crate::camera::Move;
use crate::event::Event;
use sculpt_edit::Shape;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{word}`")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },
    #[error("line {line}: bad argument `{arg}` for `{command}`")]
    BadArgument {
        line: usize,
        command: String,
        arg: String,
    },
    #[error("line {line}: unexpected trailing input `{rest}`")]
    TrailingInput { line: usize, rest: String },
}

/// Largest `*N` a single line may ask for.
pub const MAX_REPEAT: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Emit(Event),
    Wait(u64),
}

fn move_for(word: &str) -> Option<Move> {
    Some(match word {
        "forward" => Move::Forward,
        "back" => Move::Back,
        "left" => Move::StrafeLeft,
        "right" => Move::StrafeRight,
        "look-up" => Move::LookUp,
        "look-down" => Move::LookDown,
        "turn-left" => Move::TurnLeft,
        "turn-right" => Move::TurnRight,
        "rise" => Move::Rise,
        "fall" => Move::Fall,
        _ => return None,
    })
}

pub fn parse_script(src: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let body = raw.split('#').next().unwrap_or("").trim();
        if body.is_empty() {
            continue;
        }
        let mut words: Vec<&str> = body.split_whitespace().collect();

        let mut repeat = 1usize;
        if let Some(last) = words.last().copied() {
            if let Some(n) = last.strip_prefix('*') {
                repeat = n
                    .parse::<usize>()
                    .ok()
                    .filter(|&r| r <= MAX_REPEAT)
                    .ok_or_else(|| ScriptError::BadArgument {
                        line,
                        command: words[0].to_string(),
                        arg: last.to_string(),
                    })?;
                words.pop();
            }
        }

        let Some((&cmd, args)) = words.split_first() else {
            // a bare `*N`
            return Err(ScriptError::UnknownCommand {
                line,
                word: body.to_string(),
            });
        };
        let step = parse_command(line, cmd, args)?;
        steps.extend(std::iter::repeat_n(step, repeat));
    }
    Ok(steps)
}

fn parse_command(line: usize, cmd: &str, args: &[&str]) -> Result<Step, ScriptError> {
    let missing = |expected| ScriptError::MissingArgument {
        line,
        command: cmd.to_string(),
        expected,
    };
    let bad = |arg: &str| ScriptError::BadArgument {
        line,
        command: cmd.to_string(),
        arg: arg.to_string(),
    };

    let (step, used) = if let Some(m) = move_for(cmd) {
        (Step::Emit(Event::MoveRequested { step: m }), 0)
    } else {
        match cmd {
            "place" => (Step::Emit(Event::PlaceRequested), 0),
            "remove" => (Step::Emit(Event::RemoveRequested), 0),
            "sphere" => (Step::Emit(Event::ShapeRequested { shape: Shape::Sphere }), 0),
            "cube" => (Step::Emit(Event::ShapeRequested { shape: Shape::Cube }), 0),
            "mouse" => {
                let (Some(x), Some(y)) = (args.first().copied(), args.get(1).copied()) else {
                    return Err(missing("two coordinates"));
                };
                let x: f32 = x.parse().map_err(|_| bad(x))?;
                let y: f32 = y.parse().map_err(|_| bad(y))?;
                (Step::Emit(Event::MouseMoved { x, y }), 2)
            }
            "reach" => {
                let d = args.first().copied().ok_or_else(|| missing("a signed step"))?;
                let delta: i32 = d.trim_start_matches('+').parse().map_err(|_| bad(d))?;
                (Step::Emit(Event::ReachAdjusted { delta }), 1)
            }
            "wait" => {
                let n = args.first().copied().ok_or_else(|| missing("a tick count"))?;
                (Step::Wait(n.parse().map_err(|_| bad(n))?), 1)
            }
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    word: cmd.to_string(),
                });
            }
        }
    };

    if args.len() > used {
        return Err(ScriptError::TrailingInput {
            line,
            rest: args[used..].join(" "),
        });
    }
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_comments_and_repeats() {
        let steps = parse_script(
            "# warm up\n\
             turn-left *3\n\
             \n\
             mouse 380 300   # nudge\n\
             reach +2\n\
             reach -1\n\
             wait 4\n\
             place\n\
             sphere\n",
        )
        .unwrap();
        let turn = Step::Emit(Event::MoveRequested { step: Move::TurnLeft });
        assert_eq!(
            steps,
            vec![
                turn,
                turn,
                turn,
                Step::Emit(Event::MouseMoved { x: 380.0, y: 300.0 }),
                Step::Emit(Event::ReachAdjusted { delta: 2 }),
                Step::Emit(Event::ReachAdjusted { delta: -1 }),
                Step::Wait(4),
                Step::Emit(Event::PlaceRequested),
                Step::Emit(Event::ShapeRequested { shape: Shape::Sphere }),
            ]
        );
    }

    #[test]
    fn zero_repeat_emits_nothing() {
        assert!(parse_script("place *0").unwrap().is_empty());
    }

    #[test]
    fn repeat_counts_are_capped() {
        assert_eq!(parse_script("place *10000").unwrap().len(), MAX_REPEAT);
        assert_eq!(
            parse_script("place\nplace *99999999999999"),
            Err(ScriptError::BadArgument {
                line: 2,
                command: "place".into(),
                arg: "*99999999999999".into()
            })
        );
        assert!(parse_script("place *10001").is_err());
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_script("place\njump"),
            Err(ScriptError::UnknownCommand { line: 2, word: "jump".into() })
        );
        assert_eq!(
            parse_script("\n\nmouse 3"),
            Err(ScriptError::MissingArgument {
                line: 3,
                command: "mouse".into(),
                expected: "two coordinates"
            })
        );
        assert_eq!(
            parse_script("reach lots"),
            Err(ScriptError::BadArgument {
                line: 1,
                command: "reach".into(),
                arg: "lots".into()
            })
        );
        assert_eq!(
            parse_script("place now"),
            Err(ScriptError::TrailingInput { line: 1, rest: "now".into() })
        );
        assert!(parse_script("forward *x").is_err());
        assert!(parse_script("*3").is_err());
    }

    #[test]
    fn error_messages_read_well() {
        let e = parse_script("wait").unwrap_err();
        assert_eq!(e.to_string(), "line 1: `wait` expects a tick count");
    }
}
