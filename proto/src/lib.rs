//! Host boundary protocol for the pickleball core
//!
//! Uses postcard for compact binary serialization. Commands flow in from the
//! presentation layer, snapshots flow out.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Shared enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SideP {
    Human,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PhaseP {
    Menu,
    Playing,
    Paused,
    GameOver,
}

// ============================================================================
// Inbound (presentation to core)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    Start,
    Pause,
    Resume,
    /// Pause while playing, resume while paused
    TogglePause,
    Reset,
    /// Human paddle top, already clamped by the input adapter
    PaddleTop { top: f32 },
}

// ============================================================================
// Outbound (core to presentation)
// ============================================================================

/// Full simulation state for rendering
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StateSnapshot {
    pub tick: u32,
    pub phase: PhaseP,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub human_top: f32,
    pub opponent_top: f32,
    pub score_human: u8,
    pub score_opponent: u8,
    pub last_contact: Option<SideP>,
    pub winner: Option<SideP>,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    /// Serialize command to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize command from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl StateSnapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
