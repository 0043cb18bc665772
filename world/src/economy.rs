//! Sun bank and seed tray bookkeeping.

use lawn_defence_core::{CardSlot, PlantKind};

/// Seed cards offered to the player, in tray order.
pub(crate) const CARD_LOADOUT: [PlantKind; 3] = [
    PlantKind::Sunflower,
    PlantKind::Peashooter,
    PlantKind::Wallnut,
];

/// Balance of banked sun available for placements.
#[derive(Debug)]
pub(crate) struct SunBank {
    balance: u32,
}

impl SunBank {
    /// Creates a bank holding the provided opening balance.
    pub(crate) fn new(balance: u32) -> Self {
        Self { balance }
    }

    /// Current balance in sun points.
    pub(crate) fn balance(&self) -> u32 {
        self.balance
    }

    /// Credits collected sun to the bank.
    pub(crate) fn deposit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Debits the full cost or leaves the balance untouched.
    pub(crate) fn try_spend(&mut self, amount: u32) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }
}

/// One seed card slot in the tray.
#[derive(Debug)]
pub(crate) struct SeedCard {
    kind: PlantKind,
    recharge_in: f32,
}

impl SeedCard {
    fn new(kind: PlantKind) -> Self {
        Self {
            kind,
            recharge_in: 0.0,
        }
    }

    /// Kind of plant the card seeds.
    pub(crate) fn kind(&self) -> PlantKind {
        self.kind
    }

    /// Seconds left until the card finishes recharging.
    pub(crate) fn recharge_in(&self) -> f32 {
        self.recharge_in
    }

    /// Reports whether the card may be selected or placed.
    pub(crate) fn ready(&self) -> bool {
        self.recharge_in <= 0.0
    }

    /// Starts the card's recharge after a placement.
    pub(crate) fn start_recharge(&mut self) {
        self.recharge_in = self.kind.card_recharge_secs();
    }

    fn advance(&mut self, dt_secs: f32) {
        self.recharge_in = (self.recharge_in - dt_secs).max(0.0);
    }
}

/// Seed tray holding the cards, the bank, and the active selection.
#[derive(Debug)]
pub(crate) struct CardTray {
    bank: SunBank,
    cards: Vec<SeedCard>,
    selected: Option<CardSlot>,
}

impl CardTray {
    /// Creates a fresh tray with the standard loadout and opening balance.
    pub(crate) fn new(opening_balance: u32) -> Self {
        Self {
            bank: SunBank::new(opening_balance),
            cards: CARD_LOADOUT.iter().copied().map(SeedCard::new).collect(),
            selected: None,
        }
    }

    /// Read access to the bank.
    pub(crate) fn bank(&self) -> &SunBank {
        &self.bank
    }

    /// Mutable access to the bank.
    pub(crate) fn bank_mut(&mut self) -> &mut SunBank {
        &mut self.bank
    }

    /// Card stored at the provided slot, if the slot exists.
    pub(crate) fn card(&self, slot: CardSlot) -> Option<&SeedCard> {
        self.cards.get(usize::from(slot.get()))
    }

    /// Mutable card access for recharge bookkeeping.
    pub(crate) fn card_mut(&mut self, slot: CardSlot) -> Option<&mut SeedCard> {
        self.cards.get_mut(usize::from(slot.get()))
    }

    /// Iterator over all cards paired with their slots, in tray order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (CardSlot, &SeedCard)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (CardSlot::new(index as u8), card))
    }

    /// Slot of the active selection, if any.
    pub(crate) fn selected(&self) -> Option<CardSlot> {
        self.selected
    }

    /// Makes the slot the active selection.
    pub(crate) fn select(&mut self, slot: CardSlot) {
        self.selected = Some(slot);
    }

    /// Clears the active selection.
    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Counts down every card's recharge timer.
    pub(crate) fn advance_timers(&mut self, dt_secs: f32) {
        for card in &mut self.cards {
            card.advance(dt_secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_spend_leaves_the_balance_untouched() {
        let mut bank = SunBank::new(40);
        assert!(!bank.try_spend(50));
        assert_eq!(bank.balance(), 40);
    }

    #[test]
    fn successful_spend_debits_the_full_cost() {
        let mut bank = SunBank::new(150);
        assert!(bank.try_spend(100));
        assert_eq!(bank.balance(), 50);
    }

    #[test]
    fn deposits_accumulate() {
        let mut bank = SunBank::new(0);
        bank.deposit(25);
        bank.deposit(25);
        assert_eq!(bank.balance(), 50);
    }

    #[test]
    fn recharge_counts_down_to_ready() {
        let mut card = SeedCard::new(PlantKind::Peashooter);
        assert!(card.ready());

        card.start_recharge();
        assert!(!card.ready());

        card.advance(PlantKind::Peashooter.card_recharge_secs());
        assert!(card.ready());
        assert_eq!(card.recharge_in(), 0.0);
    }

    #[test]
    fn tray_offers_the_standard_loadout_in_order() {
        let tray = CardTray::new(50);
        let kinds: Vec<PlantKind> = tray.iter().map(|(_, card)| card.kind()).collect();
        assert_eq!(kinds, CARD_LOADOUT.to_vec());
        assert!(tray.selected().is_none());
    }

    #[test]
    fn selection_is_tracked_per_slot() {
        let mut tray = CardTray::new(50);
        let slot = CardSlot::new(1);
        tray.select(slot);
        assert_eq!(tray.selected(), Some(slot));
        tray.clear_selection();
        assert!(tray.selected().is_none());
    }
}
