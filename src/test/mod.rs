mod reception;
mod simulator;
