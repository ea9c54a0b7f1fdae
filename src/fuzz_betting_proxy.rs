// Typed call proxy for the fuzz-betting contract, laid out the way
// sc-meta generates proxies. Keep in sync with the endpoint list.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub use crate::types::{FeeConfig, Prompt, Round, RoundStatus, SettlementSummary, Side};

pub struct FuzzBettingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FuzzBettingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FuzzBettingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FuzzBettingProxyMethods { wrapped_tx: tx }
    }
}

pub struct FuzzBettingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> FuzzBettingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bet_token: Arg0,
        agent_a: Arg1,
        agent_b: Arg2,
        base_prompt_bet_amount: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&bet_token)
            .argument(&agent_a)
            .argument(&agent_b)
            .argument(&base_prompt_bet_amount)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FuzzBettingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FuzzBettingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn bet_with_prompt<
        Arg0: ProxyArg<bool>,
        Arg1: ProxyArg<OptionalValue<ManagedBuffer<Env::Api>>>,
    >(
        self,
        is_side_a: Arg0,
        content: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("betWithPrompt")
            .argument(&is_side_a)
            .argument(&content)
            .original_result()
    }

    pub fn bet_on_agent<
        Arg0: ProxyArg<bool>,
    >(
        self,
        is_side_a: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("betOnAgent")
            .argument(&is_side_a)
            .original_result()
    }

    pub fn end_game<
        Arg0: ProxyArg<bool>,
    >(
        self,
        winner_is_side_a: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endGame")
            .argument(&winner_is_side_a)
            .original_result()
    }

    pub fn reset_round(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("resetRound")
            .original_result()
    }

    pub fn get_user_contribution<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        user: Arg0,
        game_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUserContribution")
            .argument(&user)
            .argument(&game_id)
            .original_result()
    }

    pub fn get_prompt<
        Arg0: ProxyArg<u64>,
    >(
        self,
        prompt_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Prompt<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrompt")
            .argument(&prompt_id)
            .original_result()
    }

    pub fn get_current_game_prompts(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Prompt<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentGamePrompts")
            .original_result()
    }

    pub fn get_round<
        Arg0: ProxyArg<u64>,
    >(
        self,
        game_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Round<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRound")
            .argument(&game_id)
            .original_result()
    }

    pub fn game_ended(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("gameEnded")
            .original_result()
    }

    pub fn total_agent_a(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalAgentA")
            .original_result()
    }

    pub fn total_agent_b(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalAgentB")
            .original_result()
    }

    pub fn prompt_counter(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("promptCounter")
            .original_result()
    }

    pub fn get_round_bettors<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        game_id: Arg0,
        is_side_a: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoundBettors")
            .argument(&game_id)
            .argument(&is_side_a)
            .original_result()
    }

    pub fn current_game_id(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentGameId")
            .original_result()
    }

    pub fn calculate_dynamic_bet_amount<
        Arg0: ProxyArg<bool>,
    >(
        self,
        is_side_a: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateDynamicBetAmount")
            .argument(&is_side_a)
            .original_result()
    }

    pub fn get_market_info(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, BigUint<Env::Api>, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMarketInfo")
            .original_result()
    }

    pub fn get_settlement<
        Arg0: ProxyArg<u64>,
    >(
        self,
        game_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<SettlementSummary<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSettlement")
            .argument(&game_id)
            .original_result()
    }

    pub fn set_base_prompt_bet_amount<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setBasePromptBetAmount")
            .argument(&amount)
            .original_result()
    }

    pub fn update_fees<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        participation_fee_bps: Arg0,
        winner_fee_bps: Arg1,
        dev_fee_bps: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateFees")
            .argument(&participation_fee_bps)
            .argument(&winner_fee_bps)
            .argument(&dev_fee_bps)
            .original_result()
    }

    pub fn set_max_side_bettors<
        Arg0: ProxyArg<u64>,
    >(
        self,
        limit: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxSideBettors")
            .argument(&limit)
            .original_result()
    }

    pub fn max_side_bettors(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("maxSideBettors")
            .original_result()
    }

    pub fn get_fee_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFeeConfig")
            .original_result()
    }

    pub fn participation_fee_percentage(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("participationFeePercentage")
            .original_result()
    }

    pub fn winner_fee_percentage(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("winnerFeePercentage")
            .original_result()
    }

    pub fn dev_fee_percentage(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("devFeePercentage")
            .original_result()
    }

    pub fn bet_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("betToken")
            .original_result()
    }

    pub fn agent_a(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("agentA")
            .original_result()
    }

    pub fn agent_b(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("agentB")
            .original_result()
    }

    pub fn base_prompt_bet_amount(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("basePromptBetAmount")
            .original_result()
    }

    pub fn add_admin<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn remove_admin<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn is_admin<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn get_admins(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmins")
            .original_result()
    }
}
