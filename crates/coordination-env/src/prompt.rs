//! System prompts for the two players

use coordination_logic::{GameParams, Player};

/// Rules, payoffs and output format for `player`
pub fn system_prompt(params: &GameParams, player: Player) -> String {
    format!(
        "You are {player_id} in a coordination game.

## THE GAME

You and another player must each choose an action SIMULTANEOUSLY.
Neither of you can see the other's choice before making your own.

## ACTIONS

Each round, you will be given a list of {count} available actions.
The actions are random letter strings with no inherent meaning or order.

## PAYOFFS

- If you BOTH choose the SAME action: you each get {hit} point(s)
- If you choose DIFFERENT actions: you each get {miss} point(s)

## YOUR GOAL

Coordinate with the other player to choose the same action.

## OUTPUT FORMAT

Respond with ONLY your chosen action in <answer></answer> tags. Nothing else.
",
        player_id = player.id().to_uppercase(),
        count = params.action_count(),
        hit = params.coordinate_payoff(),
        miss = params.miscoordinate_payoff(),
    )
}
