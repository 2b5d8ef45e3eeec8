//! Presentation boundary.
//!
//! The game core never prints. A [`Presenter`] receives snapshots and events
//! and decides how to show them; [`TerminalPresenter`] is the text version.

use std::io::{self, Write};

use crate::game::state::{GameEvent, Snapshot};

pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()>;
    fn announce(&mut self, event: &GameEvent) -> io::Result<()>;
}

/// Draws the grid one glyph per tile, followed by the stat lines.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        for row in &snapshot.grid {
            let line: Vec<String> = row.iter().map(|tile| tile.symbol().to_string()).collect();
            writeln!(self.out, "{}", line.join(" "))?;
        }
        writeln!(self.out, "Health: {}", snapshot.player.health)?;
        writeln!(
            self.out,
            "Treasures: {}/{}, Inventory: {}",
            snapshot.treasures,
            snapshot.treasure_target,
            snapshot.inventory.join(", ")
        )?;
        writeln!(self.out, "Level: {}", snapshot.level)?;
        self.out.flush()
    }

    fn announce(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::LevelCleared { level } => writeln!(self.out, "Level {level} complete!"),
            GameEvent::Defeated { .. } => writeln!(self.out, "You have been defeated! Game Over."),
            GameEvent::CombatResolved(report) => writeln!(
                self.out,
                "Fought for {} round(s): dealt {}, took {}.",
                report.rounds, report.damage_dealt, report.damage_taken
            ),
            GameEvent::Healed { amount, health } => {
                writeln!(self.out, "Healed {amount} (health {health}).")
            }
            GameEvent::TreasureCollected { .. } | GameEvent::EnemySlain { .. } => Ok(()),
        }
    }
}
