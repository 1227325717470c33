//! What a frame looks like
//!
//! World objects are drawn in camera space (translated by the camera offset).
//! The score compensates for that translation so it stays pinned to the top
//! right corner of the screen.

use super::Surface;
use crate::centered;
use crate::palette::*;
use crate::sim::GameState;

/// Fill the play area with the background
pub fn clear(surface: &mut impl Surface, state: &GameState) {
    let t = &state.tuning;
    surface.set_fill(BACKGROUND);
    surface.fill_rect(0.0, 0.0, t.game_width, t.game_height);
}

/// Platforms, then the player, then the score
pub fn draw_world(surface: &mut impl Surface, state: &GameState) {
    let camera = &state.camera;
    surface.translate(camera.x, camera.y);

    surface.set_fill(PLATFORM);
    for platform in state.platforms.values() {
        let r = &platform.rect;
        surface.fill_rect(r.pos.x, r.pos.y, r.size.x, r.size.y);
    }

    let p = state.player.aabb();
    surface.set_fill(PLAYER);
    surface.fill_rect(p.pos.x, p.pos.y, p.size.x, p.size.y);

    draw_score(surface, state);

    surface.translate(-camera.x, -camera.y);
}

fn draw_score(surface: &mut impl Surface, state: &GameState) {
    let t = &state.tuning;
    surface.set_font(SCORE_FONT);
    surface.set_fill(SCORE);

    let text = format!("Score: {}", state.score.display());
    let m = surface.measure_text(&text);
    surface.fill_text(
        &text,
        t.game_width - m.width - t.score_padding,
        -state.camera.y + m.ascent + t.score_padding,
    );
}

/// Translucent overlay with the heading and the final score, in screen space
pub fn draw_game_over(surface: &mut impl Surface, state: &GameState) {
    let t = &state.tuning;
    surface.set_fill(GAME_OVER_OVERLAY);
    surface.fill_rect(0.0, 0.0, t.game_width, t.game_height);

    surface.set_font(HEADING_FONT);
    surface.set_fill(GAME_OVER_HEADING);
    let heading = "GAME OVER";
    let h = surface.measure_text(heading);
    surface.fill_text(heading, centered(t.game_width, h.width), t.game_height / 2.0);

    surface.set_font(SUBTITLE_FONT);
    surface.set_fill(GAME_OVER_SUBTITLE);
    let subtitle = format!("Final score: {}", state.score.display());
    let s = surface.measure_text(&subtitle);
    surface.fill_text(
        &subtitle,
        centered(t.game_width, s.width),
        t.game_height / 2.0 + h.ascent + 10.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, Recorder};
    use crate::tuning::Tuning;

    #[test]
    fn test_world_draw_order_and_colors() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        state.camera.y = -40.0;
        let mut rec = Recorder::new();
        draw_world(&mut rec, &state);

        let rects = rec.rects();
        // One platform, then the player
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].0, PLATFORM);
        assert_eq!(rects[1].0, PLAYER);
        assert_eq!(rects[1].1, [305.0, 30.0, 30.0, 30.0]);

        // Translation is applied and undone
        assert_eq!(rec.calls.first(), Some(&DrawCall::Translate(0.0, -40.0)));
        assert_eq!(rec.calls.last(), Some(&DrawCall::Translate(-0.0, 40.0)));
        assert_eq!(rec.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_score_pinned_top_right() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        state.camera.y = -300.0;
        state.score.update(1234.0);
        let mut rec = Recorder::new();
        draw_world(&mut rec, &state);

        let (text, x, y) = rec.texts().pop().unwrap();
        assert_eq!(text, "Score: 1.23");
        let m = Recorder::metrics_for(&text, 20.0);
        assert_eq!(x, 640.0 - m.width - 10.0);
        assert_eq!(y, 300.0 + m.ascent + 10.0);
        // On screen (after the -300 camera translation) it's near the top
        assert!(y - 300.0 < 40.0);
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        state.score.update(7_891.0);
        let mut rec = Recorder::new();
        draw_game_over(&mut rec, &state);

        let rects = rec.rects();
        assert_eq!(rects[0], (GAME_OVER_OVERLAY.to_string(), [0.0, 0.0, 640.0, 480.0]));

        let texts = rec.texts();
        assert_eq!(texts.len(), 2);
        let heading = Recorder::metrics_for("GAME OVER", 50.0);
        assert_eq!(texts[0], ("GAME OVER".to_string(), 320.0 - heading.width / 2.0, 240.0));
        assert_eq!(texts[1].0, "Final score: 7.89");
        assert_eq!(texts[1].2, 240.0 + heading.ascent + 10.0);
        assert!(rec.calls.contains(&DrawCall::Fill(GAME_OVER_HEADING.to_string())));
        assert!(rec.calls.contains(&DrawCall::Font(HEADING_FONT.to_string())));
    }

    #[test]
    fn test_clear_fills_background() {
        let state = GameState::new(5, Tuning::default(), 0.0);
        let mut rec = Recorder::new();
        clear(&mut rec, &state);
        assert_eq!(rec.rects(), vec![(BACKGROUND.to_string(), [0.0, 0.0, 640.0, 480.0])]);
    }
}
