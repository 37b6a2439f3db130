use crate::timeline::{Clock, ClockPosition, Event, GameEndTime, GameGoal, UpdateKind};
use crate::types::{Game, Goal, Period, REGULATION_PERIODS};

/// Period label as shown on a scoreboard ("1st", "OT", "2OT", "SO")
pub fn period_label(period: Period) -> String {
    match period {
        Period::Number(1) => "1st".to_string(),
        Period::Number(2) => "2nd".to_string(),
        Period::Number(3) => "3rd".to_string(),
        Period::Number(n) if n == REGULATION_PERIODS + 1 => "OT".to_string(),
        Period::Number(n) if n > REGULATION_PERIODS => format!("{}OT", n - REGULATION_PERIODS),
        Period::Number(n) => format!("{}th", n),
        Period::Overtime => "OT".to_string(),
        Period::Shootout => "SO".to_string(),
    }
}

/// Remaining time on the clock ("12:34", "0:05", "0:00.7")
pub fn format_clock(clock: &Clock) -> String {
    match clock.tenth_of_second {
        Some(tenths) => format!("{}:{:02}.{}", clock.minute, clock.second, tenths),
        None => format!("{}:{:02}", clock.minute, clock.second),
    }
}

/// Period and clock ("2nd 4:56", "SO")
pub fn format_position(position: &ClockPosition) -> String {
    match position {
        ClockPosition::Clock(clock) => format!("{} {}", period_label(clock.period), format_clock(clock)),
        ClockPosition::Shootout => period_label(Period::Shootout),
    }
}

/// Elapsed time of a goal within its period ("8:44")
pub fn format_goal_time(goal: &Goal) -> String {
    match (goal.min, goal.sec) {
        (Some(min), sec) => format!("{}:{:02}", min, sec.unwrap_or(0)),
        (None, _) => String::new(),
    }
}

/// Scorer, assists and special markers of a goal
///
/// "Sidney Crosby (18) (Jake Guentzel, Kris Letang) PPG EN"
pub fn format_goal(goal: &Goal) -> String {
    let mut text = goal.scorer.player.clone();
    if let Some(total) = goal.scorer.season_total {
        text.push_str(&format!(" ({})", total));
    }
    if !goal.assists.is_empty() {
        let assists: Vec<&str> = goal.assists.iter().map(|a| a.player.as_str()).collect();
        text.push_str(&format!(" ({})", assists.join(", ")));
    }
    if let Some(strength) = &goal.strength {
        text.push(' ');
        text.push_str(strength);
    }
    if goal.empty_net {
        text.push_str(" EN");
    }
    text
}

/// Team and goal line for a tagged goal ("PIT  2nd 6:12  Evgeni Malkin (14) ...")
pub fn format_game_goal(goal: &GameGoal) -> String {
    let time = format_goal_time(&goal.goal);
    let period = period_label(goal.goal.period);
    if time.is_empty() {
        format!("{:<4} {:<10} {}", goal.goal.team, period, format_goal(&goal.goal))
    } else {
        format!("{:<4} {:<10} {}", goal.goal.team, format!("{} {}", period, time), format_goal(&goal.goal))
    }
}

/// Where the shared clock stops
pub fn format_end_time(end_time: &GameEndTime) -> String {
    let position = match end_time.remaining {
        Some(remaining) => format!(
            "{} {}:{:02} remaining",
            period_label(end_time.period),
            remaining.minute,
            remaining.second
        ),
        None if end_time.period.is_shootout() => period_label(end_time.period),
        None => format!("end of {}", period_label(end_time.period)),
    };
    if end_time.in_progress {
        format!("{} (in progress)", position)
    } else {
        position
    }
}

/// Matchup label ("PIT @ WSH")
pub fn matchup(game: &Game) -> String {
    format!("{} @ {}", game.teams.away.abbreviation, game.teams.home.abbreviation)
}

/// One line per visible event, for printing a timeline
///
/// Returns `None` for pause placeholders.
pub fn format_event(event: &Event, games: &[Game]) -> Option<String> {
    let line = match event {
        Event::Start => "START".to_string(),
        Event::Clock(clock) => format!("{:>4} {}", period_label(clock.period), format_clock(clock)),
        Event::GameUpdate(update) => {
            let game = games
                .get(update.game_index)
                .map(matchup)
                .unwrap_or_else(|| format!("game {}", update.game_index));
            let detail = match update.kind {
                UpdateKind::Start => "focus".to_string(),
                UpdateKind::Goal => format!("GOAL {} {}", update.goal.goal.team, format_goal(&update.goal.goal)),
                UpdateKind::End => "unfocus".to_string(),
            };
            format!("{:>9}  {:<11} {}", format_position(&update.at), game, detail)
        }
        Event::PeriodEnd { period } => format!("END OF {}", period_label(*period)),
        Event::PreSummary { in_progress } => format!("PRE-SUMMARY{}", in_progress_suffix(*in_progress)),
        Event::Summary { in_progress } => format!("SUMMARY{}", in_progress_suffix(*in_progress)),
        Event::End { in_progress } => format!("END{}", in_progress_suffix(*in_progress)),
        Event::Pause => return None,
    };
    Some(line)
}

fn in_progress_suffix(in_progress: bool) -> &'static str {
    if in_progress {
        " (games in progress)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{goal, goal_with_assists, shootout_goal};
    use crate::timeline::RemainingTime;

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(Period::Number(1)), "1st");
        assert_eq!(period_label(Period::Number(2)), "2nd");
        assert_eq!(period_label(Period::Number(3)), "3rd");
        assert_eq!(period_label(Period::Number(4)), "OT");
        assert_eq!(period_label(Period::Number(6)), "3OT");
        assert_eq!(period_label(Period::Overtime), "OT");
        assert_eq!(period_label(Period::Shootout), "SO");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(&Clock::new(Period::Number(1), 20, 0)), "20:00");
        assert_eq!(format_clock(&Clock::new(Period::Number(1), 4, 5)), "4:05");
        assert_eq!(format_clock(&Clock::with_tenths(Period::Number(3), 0, 0, 7)), "0:00.7");
    }

    #[test]
    fn test_format_position() {
        let clock = ClockPosition::Clock(Clock::new(Period::Number(2), 4, 56));
        assert_eq!(format_position(&clock), "2nd 4:56");
        assert_eq!(format_position(&ClockPosition::Shootout), "SO");
    }

    #[test]
    fn test_format_goal() {
        let mut g = goal_with_assists(2, 6, 12, "PIT", &["Kris Letang", "Sidney Crosby"]);
        g.scorer.player = "Evgeni Malkin".to_string();
        g.scorer.season_total = Some(14);
        g.strength = Some("PPG".to_string());
        assert_eq!(format_goal(&g), "Evgeni Malkin (14) (Kris Letang, Sidney Crosby) PPG");

        let mut en = goal(3, 19, 1, "PIT");
        en.scorer.season_total = None;
        en.empty_net = true;
        assert_eq!(format_goal(&en), "PIT Scorer EN");
    }

    #[test]
    fn test_format_goal_time() {
        assert_eq!(format_goal_time(&goal(1, 8, 4, "PIT")), "8:04");
        assert_eq!(format_goal_time(&shootout_goal("PIT")), "");
    }

    #[test]
    fn test_format_end_time() {
        let live = GameEndTime {
            period: Period::Number(2),
            remaining: Some(RemainingTime::new(4, 56)),
            in_progress: true,
        };
        assert_eq!(format_end_time(&live), "2nd 4:56 remaining (in progress)");
        assert_eq!(format_end_time(&GameEndTime::regulation_end()), "end of 3rd");
        let shootout = GameEndTime {
            period: Period::Shootout,
            remaining: None,
            in_progress: false,
        };
        assert_eq!(format_end_time(&shootout), "SO");
    }

    #[test]
    fn test_format_event_hides_pauses() {
        assert_eq!(format_event(&Event::Pause, &[]), None);
        assert_eq!(format_event(&Event::Start, &[]), Some("START".to_string()));
        assert_eq!(
            format_event(&Event::PeriodEnd { period: Period::Number(2) }, &[]),
            Some("END OF 2nd".to_string())
        );
        assert_eq!(
            format_event(&Event::End { in_progress: true }, &[]),
            Some("END (games in progress)".to_string())
        );
    }
}
