/// Unscramble renderer: playing screen plus the end-of-round summary
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::game::UnscrambleGame;
use crate::core::renderer::{centered_rect, GameRenderer};
use crate::games::UNSCRAMBLE;

pub struct UnscrambleRenderer;

impl GameRenderer<UnscrambleGame> for UnscrambleRenderer {
    fn render(frame: &mut Frame, game: &UnscrambleGame) {
        let snap = game.snapshot();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(format!(" {} ", UNSCRAMBLE.name.to_uppercase()))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        // Word number on screen is the one being attempted, not the ones done
        let word_number = (snap.words_attempted + 1).min(snap.max_words);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        frame.render_widget(
            Paragraph::new(format!("{} of {} words", word_number, snap.max_words)),
            header[0],
        );
        frame.render_widget(
            Paragraph::new(format!("Score: {}", snap.score)).alignment(Alignment::Right),
            header[1],
        );

        let word = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                snap.scrambled_word.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Unscramble the word using all the letters."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(word, chunks[2]);

        let input_block = if game.show_error() {
            Block::default()
                .borders(Borders::ALL)
                .title(" Try again! ")
                .border_style(Style::default().fg(Color::Red))
        } else {
            Block::default().borders(Borders::ALL).title(" Enter your word ")
        };
        frame.render_widget(Paragraph::new(game.input()).block(input_block), chunks[3]);

        frame.render_widget(
            Paragraph::new("[Enter] Submit  [Tab] Skip  [Esc] Exit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[4],
        );

        if game.is_round_over() {
            render_summary(frame, snap.score);
        } else {
            let cursor_x = chunks[3].x + 1 + game.input().chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(chunks[3].right().saturating_sub(2)), chunks[3].y + 1));
        }
    }
}

fn render_summary(frame: &mut Frame, score: u32) {
    let area: Rect = centered_rect(36, 7, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("You scored: {}", score)),
            Line::from(""),
            Line::from("[P] Play again   [E] Exit"),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Congratulations! ")
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}
