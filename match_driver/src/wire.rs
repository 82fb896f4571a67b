//! Mapping between core types and the boundary protocol

use game_core::{MatchPhase, Side, SimSnapshot};
use proto::{PhaseP, SideP, StateSnapshot};

pub fn side_to_wire(side: Side) -> SideP {
    match side {
        Side::Human => SideP::Human,
        Side::Opponent => SideP::Opponent,
    }
}

pub fn phase_to_wire(phase: MatchPhase) -> PhaseP {
    match phase {
        MatchPhase::Menu => PhaseP::Menu,
        MatchPhase::Playing => PhaseP::Playing,
        MatchPhase::Paused => PhaseP::Paused,
        MatchPhase::GameOver => PhaseP::GameOver,
    }
}

pub fn snapshot_to_wire(snap: &SimSnapshot) -> StateSnapshot {
    StateSnapshot {
        tick: snap.tick,
        phase: phase_to_wire(snap.phase),
        ball_x: snap.ball_pos.x,
        ball_y: snap.ball_pos.y,
        ball_vx: snap.ball_vel.x,
        ball_vy: snap.ball_vel.y,
        human_top: snap.human_top,
        opponent_top: snap.opponent_top,
        score_human: snap.score.human,
        score_opponent: snap.score.opponent,
        last_contact: snap.last_contact.map(side_to_wire),
        winner: snap.winner.map(side_to_wire),
    }
}
