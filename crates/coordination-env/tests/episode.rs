use coordination_env::{
    train_dataset, Agent, AgentError, CoordinationEnv, EnvConfig, EnvError, ScriptedAgent,
};
use coordination_logic::{score_from_transcript, ActionSource, GameState, Message, Player, Role};
use proptest::prelude::*;

fn two_action_env() -> CoordinationEnv {
    CoordinationEnv::new(EnvConfig {
        num_actions: 2,
        coordinate_payoff: 1.0,
        miscoordinate_payoff: 0.0,
        ..EnvConfig::default()
    })
    .unwrap()
}

fn tagged(label: &str) -> String {
    format!("<answer>{label}</answer>")
}

struct FailingAgent;

impl Agent for FailingAgent {
    fn respond(&mut self, _player: Player, _messages: &[Message]) -> Result<String, AgentError> {
        Err(AgentError::new("timeout"))
    }
}

#[test]
fn scenario_a_matching_answers_coordinate() {
    let env = two_action_env();
    let mut p1 = ScriptedAgent::new([tagged("qahf")]);
    let mut p2 = ScriptedAgent::new([tagged("QAHF")]);

    let episode = env.run_episode(0, &mut p1, &mut p2).unwrap();
    let result = episode.state.result().unwrap();
    assert!(result.coordinated);
    assert_eq!(result.payoff, 1.0);
    assert_eq!(result.player_1_action, "qahf");
    assert_eq!(result.player_2_action, "qahf");

    for player in Player::ALL {
        let reward = episode.reward(player);
        assert_eq!(reward.coordination, 1.0);
        assert_eq!(reward.format, 1.0);
    }
}

#[test]
fn scenario_b_different_answers_miscoordinate() {
    let env = two_action_env();
    let mut p1 = ScriptedAgent::new([tagged("qahf")]);
    let mut p2 = ScriptedAgent::new([tagged("trxc")]);

    let episode = env.run_episode(0, &mut p1, &mut p2).unwrap();
    let result = episode.state.result().unwrap();
    assert!(!result.coordinated);
    assert_eq!(result.payoff, 0.0);
    assert_eq!(score_from_transcript(episode.history(Player::One)), 0.0);
}

#[test]
fn scenario_c_garbled_answer_uses_reproducible_fallback() {
    let env = two_action_env();
    let run = || {
        let mut p1 = ScriptedAgent::new(["I think the first one?"]);
        let mut p2 = ScriptedAgent::new([tagged("trxc")]);
        env.run_episode(0, &mut p1, &mut p2).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.turns[0].source, ActionSource::Fallback);
    assert_eq!(first.turns[1].source, ActionSource::Parsed);

    let expected = GameState::new(*env.params(), 0).unwrap().fallback_action(Player::One).unwrap().to_string();
    assert_eq!(first.turns[0].action, expected);
    assert_eq!(first.state.result(), second.state.result());

    let result = first.state.result().unwrap();
    assert!(result.payoff == 1.0 || result.payoff == 0.0);
    assert_eq!(result.coordinated, result.player_1_action == "trxc");
    assert_eq!(first.reward(Player::One).format, 0.0);
}

#[test]
fn player_two_never_sees_player_one_choice() {
    let env = CoordinationEnv::new(EnvConfig::default()).unwrap();
    let mut p1 = ScriptedAgent::new([tagged("nzjo")]);
    let mut p2 = ScriptedAgent::new([tagged("usie")]);

    let episode = env.run_episode(41, &mut p1, &mut p2).unwrap();

    let seen = &p2.seen()[0];
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].role, Role::System);
    assert_eq!(seen[1].role, Role::User);
    assert!(seen.iter().all(|m| !m.content.contains("player_1_action")));
    assert!(seen.iter().all(|m| m.role != Role::Assistant));
    assert_eq!(seen[1].content, episode.state.observation_for(Player::Two));
}

#[test]
fn histories_end_with_the_final_payload() {
    let env = two_action_env();
    let mut p1 = ScriptedAgent::new([tagged("trxc")]);
    let mut p2 = ScriptedAgent::new([tagged("trxc")]);
    let episode = env.run_episode(3, &mut p1, &mut p2).unwrap();

    for player in Player::ALL {
        let history = episode.history(player);
        assert_eq!(history.len(), 4);
        let roles: Vec<Role> = history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
        assert!(history[3].content.starts_with("Game Complete!"));
    }
    assert_eq!(episode.history(Player::One)[3], episode.history(Player::Two)[3]);
}

#[test]
fn agent_failure_aborts_the_episode() {
    let env = two_action_env();
    let mut p1 = ScriptedAgent::new([tagged("qahf")]);
    let mut p2 = FailingAgent;

    let err = env.run_episode(0, &mut p1, &mut p2).unwrap_err();
    assert!(matches!(err, EnvError::Agent { player: Player::Two, .. }));
}

#[test]
fn dataset_examples_drive_episodes() {
    let config = EnvConfig { num_train_examples: 3, num_actions: 4, ..EnvConfig::default() };
    let env = CoordinationEnv::new(config.clone()).unwrap();

    for (seed, example) in train_dataset(&config).unwrap().iter().enumerate() {
        let mut p1 = ScriptedAgent::new([tagged("afqo")]);
        let mut p2 = ScriptedAgent::new([tagged("afqo")]);
        let episode = env.run_example(example, &mut p1, &mut p2).unwrap();
        assert_eq!(episode.state.seed(), seed as u64);
        assert_eq!(episode.state.payoff(), Some(1.0));
    }
}

proptest! {
    #[test]
    fn any_replies_complete_with_a_shared_payload(
        seed in any::<u64>(),
        reply_1 in prop_oneof![".{0,30}", "<answer>[a-zA-Z]{4}</answer>"],
        reply_2 in prop_oneof![".{0,30}", "<answer>(qahf|trxc|kafn)</answer>"],
    ) {
        let env = CoordinationEnv::new(EnvConfig { num_actions: 3, ..EnvConfig::default() }).unwrap();
        let mut p1 = ScriptedAgent::new([reply_1]);
        let mut p2 = ScriptedAgent::new([reply_2]);

        let episode = env.run_episode(seed, &mut p1, &mut p2).unwrap();
        prop_assert!(episode.state.is_complete());

        let last_1 = episode.history(Player::One).last().unwrap();
        let last_2 = episode.history(Player::Two).last().unwrap();
        prop_assert_eq!(last_1, last_2);

        let payoff = episode.state.payoff().unwrap();
        for player in Player::ALL {
            prop_assert_eq!(score_from_transcript(episode.history(player)), payoff);
        }
    }
}
