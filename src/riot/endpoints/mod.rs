mod match_v4;
mod summoner;
